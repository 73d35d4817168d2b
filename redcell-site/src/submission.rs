use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use crate::case_id::generate_case_id;
use crate::models::IntakeFormData;

/// Receives a fully validated intake and returns the case reference.
#[async_trait]
pub trait CaseSubmitter: Send + Sync {
    async fn submit(&self, data: &IntakeFormData) -> anyhow::Result<String>;
}

/// Fabricates a case id and logs a summary. Nothing is stored, no files are uploaded,
/// no payment is taken.
#[derive(Debug, Clone, Default)]
pub struct MockCaseSubmitter {
    delay: Duration,
}

impl MockCaseSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl CaseSubmitter for MockCaseSubmitter {
    async fn submit(&self, data: &IntakeFormData) -> anyhow::Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let case_id = generate_case_id();
        info!(
            id = %case_id,
            scenario = ?data.basics.scenario,
            tier = ?data.tier.selected_tier,
            urgency = ?data.basics.urgency,
            file_count = data.counterparty.files.len(),
            "case submitted"
        );
        Ok(case_id)
    }
}
