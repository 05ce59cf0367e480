//! EmberDNS Infrastructure Layer
pub mod dns;
