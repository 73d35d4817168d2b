use async_trait::async_trait;
use wizard_flow::{Context, Result, Step, StepResult};

use crate::models::BasicsFormData;
use crate::tasks::{session_keys, step_ids};
use crate::validation::validate_basics;

use super::utils::{accept, reject, section};

/// Scenario, geography, amount at risk, urgency and the case summary
pub struct BasicsStepTask;

#[async_trait]
impl Step for BasicsStepTask {
    fn id(&self) -> &str {
        step_ids::BASICS
    }

    fn title(&self) -> &str {
        "Basics"
    }

    async fn run(&self, context: Context) -> Result<StepResult> {
        let basics: BasicsFormData = section(&context, session_keys::BASICS).await;
        match validate_basics(&basics) {
            Ok(()) => accept(&context, self.id()).await,
            Err(errors) => reject(&context, self.id(), errors).await,
        }
    }
}
