pub mod listener;
pub mod lookup;
pub mod server;
pub mod socket;
pub mod wire;

pub use listener::{ListenerHandle, ListenerState, UdpListener};
pub use lookup::{build_lookup, LocalRecordLookup, StaticRecordLookup};
pub use server::DnsServerHandler;
