use super::AnswerResolver;
use crate::ports::RecordLookup;
use emberdns_domain::{Message, ResponseCode};
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds the reply for one decoded request.
pub struct HandleDnsQueryUseCase {
    resolver: AnswerResolver,
}

impl HandleDnsQueryUseCase {
    pub fn new(lookup: Arc<dyn RecordLookup>) -> Self {
        Self {
            resolver: AnswerResolver::new(lookup),
        }
    }

    /// Resolves every question in order and assembles the reply.
    ///
    /// The reply keeps the request id and question list; its counts come
    /// from the sections actually built. A failed lookup contributes no
    /// answers and turns the reply code into SERVFAIL.
    pub async fn execute(&self, request: &Message) -> Message {
        let mut answers = Vec::new();
        let mut code = ResponseCode::NoError;

        for question in &request.questions {
            match self.resolver.resolve(question).await {
                Ok(records) => answers.extend(records),
                Err(e) => {
                    warn!(
                        error = %e,
                        domain = %question.name,
                        record_type = %question.record_type,
                        "Lookup failed"
                    );
                    code = ResponseCode::ServFail;
                }
            }
        }

        let reply = Message::reply_to(request, answers, code);

        debug!(
            id = reply.header.id,
            questions = reply.questions.len(),
            answers = reply.answers.len(),
            rcode = %code,
            "Reply assembled"
        );

        reply
    }
}
