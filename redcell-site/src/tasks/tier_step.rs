use async_trait::async_trait;
use wizard_flow::{Context, Result, Step, StepResult};

use crate::models::TierFormData;
use crate::tasks::{session_keys, step_ids};
use crate::validation::validate_tier;

use super::utils::{accept, reject, section};

pub struct TierStepTask;

#[async_trait]
impl Step for TierStepTask {
    fn id(&self) -> &str {
        step_ids::TIER
    }

    fn title(&self) -> &str {
        "Tier"
    }

    async fn run(&self, context: Context) -> Result<StepResult> {
        let tier: TierFormData = section(&context, session_keys::TIER).await;
        match validate_tier(&tier) {
            Ok(()) => accept(&context, self.id()).await,
            Err(errors) => reject(&context, self.id(), errors).await,
        }
    }
}
