use async_trait::async_trait;
use tracing::debug;
use wizard_flow::{Context, Result, Step, StepResult};

use crate::models::CounterpartyFormData;
use crate::tasks::{session_keys, step_ids};
use crate::validation::validate_counterparty;

use super::utils::{accept, reject, section};

/// Who the user is dealing with, plus descriptors of any evidence files
pub struct CounterpartyStepTask;

#[async_trait]
impl Step for CounterpartyStepTask {
    fn id(&self) -> &str {
        step_ids::COUNTERPARTY
    }

    fn title(&self) -> &str {
        "Counterparty"
    }

    async fn run(&self, context: Context) -> Result<StepResult> {
        let counterparty: CounterpartyFormData =
            section(&context, session_keys::COUNTERPARTY).await;
        debug!(file_count = counterparty.files.len(), "checking counterparty");
        match validate_counterparty(&counterparty) {
            Ok(()) => accept(&context, self.id()).await,
            Err(errors) => reject(&context, self.id(), errors).await,
        }
    }
}
