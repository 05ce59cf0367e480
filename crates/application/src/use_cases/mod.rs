pub mod dns;

pub use dns::{AnswerResolver, HandleDnsQueryUseCase};
