mod handle_dns_query;
mod resolve_answers;

pub use handle_dns_query::HandleDnsQueryUseCase;
pub use resolve_answers::AnswerResolver;
