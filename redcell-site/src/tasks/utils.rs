use serde::de::DeserializeOwned;
use tracing::info;
use wizard_flow::{Context, NextAction, Result, StepResult};

use crate::models::IntakeFormData;
use crate::tasks::session_keys;
use crate::validation::ValidationErrors;

/// Answers stored for a section, or the empty form when nothing was posted yet.
pub async fn section<T: DeserializeOwned + Default>(context: &Context, key: &str) -> T {
    context.get(key).await.unwrap_or_default()
}

pub async fn collect_intake(context: &Context) -> IntakeFormData {
    IntakeFormData {
        basics: section(context, session_keys::BASICS).await,
        counterparty: section(context, session_keys::COUNTERPARTY).await,
        tier: section(context, session_keys::TIER).await,
        review: section(context, session_keys::REVIEW).await,
    }
}

/// Keeps the user on the step and stores the field errors for display.
pub async fn reject(context: &Context, step_id: &str, errors: ValidationErrors) -> Result<StepResult> {
    info!(step = %step_id, error_count = errors.errors().len(), "step rejected");
    context
        .set(session_keys::STEP_ERRORS, errors.to_field_map())
        .await?;
    unmark_completed(context, step_id).await?;
    Ok(StepResult::new_with_status(
        Some("Please correct the highlighted fields".to_string()),
        NextAction::WaitForInput,
        Some(format!("{} step has validation errors", step_id)),
    ))
}

/// Clears errors, marks the step completed and moves on.
pub async fn accept(context: &Context, step_id: &str) -> Result<StepResult> {
    context.remove(session_keys::STEP_ERRORS).await;
    mark_completed(context, step_id).await?;
    info!(step = %step_id, "step completed");
    Ok(StepResult::new_with_status(
        None,
        NextAction::Continue,
        Some(format!("{} step completed", step_id)),
    ))
}

pub async fn mark_completed(context: &Context, step_id: &str) -> Result<()> {
    let mut completed: Vec<String> = context
        .get(session_keys::COMPLETED_STEPS)
        .await
        .unwrap_or_default();
    if !completed.iter().any(|id| id == step_id) {
        completed.push(step_id.to_string());
        context.set(session_keys::COMPLETED_STEPS, completed).await?;
    }
    Ok(())
}

/// A step that fails again after the user went back is no longer done.
pub async fn unmark_completed(context: &Context, step_id: &str) -> Result<()> {
    let mut completed: Vec<String> = context
        .get(session_keys::COMPLETED_STEPS)
        .await
        .unwrap_or_default();
    let before = completed.len();
    completed.retain(|id| id != step_id);
    if completed.len() != before {
        context.set(session_keys::COMPLETED_STEPS, completed).await?;
    }
    Ok(())
}
