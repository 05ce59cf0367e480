use crate::ports::RecordLookup;
use emberdns_domain::{DomainError, Question, ResourceRecord};
use std::sync::Arc;
use tracing::debug;

/// Turns one question into its answer records through an injected lookup.
///
/// Answers are stamped with the question's class, so a CH or HS query is
/// answered in its own class whatever the lookup produced.
pub struct AnswerResolver {
    lookup: Arc<dyn RecordLookup>,
}

impl AnswerResolver {
    pub fn new(lookup: Arc<dyn RecordLookup>) -> Self {
        Self { lookup }
    }

    pub async fn resolve(&self, question: &Question) -> Result<Vec<ResourceRecord>, DomainError> {
        let name = normalize_domain(&question.name);
        let mut answers = self.lookup.lookup(name, question.record_type).await?;
        for answer in &mut answers {
            answer.class = question.class;
        }

        debug!(
            domain = %name,
            record_type = %question.record_type,
            answers = answers.len(),
            "Question resolved"
        );

        Ok(answers)
    }
}

fn normalize_domain(domain: &str) -> &str {
    domain.strip_suffix('.').unwrap_or(domain)
}
