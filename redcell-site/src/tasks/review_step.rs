use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use wizard_flow::{Context, FlowError, NextAction, Result, Step, StepResult};

use crate::models::ReviewFormData;
use crate::submission::CaseSubmitter;
use crate::tasks::{session_keys, step_ids};
use crate::validation::{validate_intake, validate_review};

use super::utils::{collect_intake, mark_completed, reject, section};

/// Final confirmation. Re-checks every section before handing the case to the submitter.
pub struct ReviewStepTask {
    submitter: Arc<dyn CaseSubmitter>,
}

impl ReviewStepTask {
    pub fn new(submitter: Arc<dyn CaseSubmitter>) -> Self {
        Self { submitter }
    }
}

#[async_trait]
impl Step for ReviewStepTask {
    fn id(&self) -> &str {
        step_ids::REVIEW
    }

    fn title(&self) -> &str {
        "Review"
    }

    async fn run(&self, context: Context) -> Result<StepResult> {
        let review: ReviewFormData = section(&context, session_keys::REVIEW).await;
        if let Err(errors) = validate_review(&review) {
            return reject(&context, self.id(), errors).await;
        }

        let intake = collect_intake(&context).await;
        if let Err(errors) = validate_intake(&intake) {
            return reject(&context, self.id(), errors).await;
        }

        let case_id = self.submitter.submit(&intake).await.map_err(|e| {
            error!(error = %e, "case submission failed");
            FlowError::StepExecutionFailed(format!("case submission failed: {}", e))
        })?;

        context.remove(session_keys::STEP_ERRORS).await;
        mark_completed(&context, self.id()).await?;
        context.set(session_keys::CASE_ID, &case_id).await?;

        let status_message = format!("Case {} submitted", case_id);
        info!("{}", status_message);

        Ok(StepResult::new_with_status(
            Some(format!(
                "We've received your case. Your case ID is {}. A specialist will contact you shortly to confirm details and timeline.",
                case_id
            )),
            NextAction::End,
            Some(status_message),
        ))
    }
}
