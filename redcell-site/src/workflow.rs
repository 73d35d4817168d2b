use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;
use wizard_flow::{FlowRunner, Graph, GraphBuilder, Result, Session, SessionStorage, Step};

use crate::models::{SessionView, StepInfo, TierFormData, TierKey};
use crate::submission::CaseSubmitter;
use crate::tasks::utils::collect_intake;
use crate::tasks::*;

pub const INTAKE_GRAPH_ID: &str = "intake_wizard";

/// basics → counterparty → tier → review
pub fn build_intake_workflow(submitter: Arc<dyn CaseSubmitter>) -> Graph {
    let basics = Arc::new(BasicsStepTask);
    let counterparty = Arc::new(CounterpartyStepTask);
    let tier = Arc::new(TierStepTask);
    let review = Arc::new(ReviewStepTask::new(submitter));

    let basics_id = basics.id().to_string();
    let counterparty_id = counterparty.id().to_string();
    let tier_id = tier.id().to_string();
    let review_id = review.id().to_string();

    GraphBuilder::new(INTAKE_GRAPH_ID)
        .add_step(basics)
        .add_step(counterparty)
        .add_step(tier)
        .add_step(review)
        .add_edge(&basics_id, &counterparty_id)
        .add_edge(&counterparty_id, &tier_id)
        .add_edge(&tier_id, &review_id)
        .build()
}

/// New session on the first step. A pricing `plan` pre-selects the tier.
pub async fn create_intake_session(plan: Option<&str>) -> Result<Session> {
    let session = Session::new_from_step(
        Uuid::new_v4().to_string(),
        INTAKE_GRAPH_ID,
        step_ids::BASICS,
    );

    if let Some(tier) = plan.and_then(TierKey::from_plan) {
        session
            .context
            .set(
                session_keys::TIER,
                TierFormData {
                    selected_tier: Some(tier),
                },
            )
            .await?;
    }

    Ok(session)
}

pub fn create_flow_runner(
    session_storage: Arc<dyn SessionStorage>,
    submitter: Arc<dyn CaseSubmitter>,
) -> FlowRunner {
    let graph = Arc::new(build_intake_workflow(submitter));
    FlowRunner::new(graph, session_storage)
}

pub async fn build_session_view(graph: &Graph, session: &Session) -> SessionView {
    let context = &session.context;
    let steps: Vec<StepInfo> = graph
        .step_ids()
        .iter()
        .filter_map(|id| graph.get_step(id))
        .map(|step| StepInfo {
            id: step.id().to_string(),
            title: step.title().to_string(),
        })
        .collect();

    let step_index = graph.position_of(&session.current_step_id).unwrap_or(0);
    let progress = if steps.is_empty() {
        0
    } else {
        (((step_index + 1) * 100) / steps.len()) as u8
    };

    let errors: BTreeMap<String, String> = context
        .get(session_keys::STEP_ERRORS)
        .await
        .unwrap_or_default();

    SessionView {
        session_id: session.id.clone(),
        current_step: session.current_step_id.clone(),
        step_index,
        steps,
        progress,
        completed_steps: context
            .get(session_keys::COMPLETED_STEPS)
            .await
            .unwrap_or_default(),
        errors,
        message: session.status_message.clone(),
        data: collect_intake(context).await,
        case_id: context.get(session_keys::CASE_ID).await,
        completed: session.completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::MockCaseSubmitter;
    use crate::validation::fixtures::{summary, valid_intake};
    use wizard_flow::{ExecutionStatus, InMemorySessionStorage};

    async fn setup() -> (FlowRunner, Arc<InMemorySessionStorage>, String) {
        let storage = Arc::new(InMemorySessionStorage::new());
        let runner = create_flow_runner(storage.clone(), Arc::new(MockCaseSubmitter::default()));
        let session = create_intake_session(None).await.unwrap();
        let id = session.id.clone();
        storage.save(session).await.unwrap();
        (runner, storage, id)
    }

    async fn post_section(
        storage: &InMemorySessionStorage,
        id: &str,
        key: &str,
        value: impl serde::Serialize,
    ) {
        let session = storage.get(id).await.unwrap().unwrap();
        session.context.set(key, value).await.unwrap();
        storage.save(session).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_basics_block_advancement() {
        let (runner, storage, id) = setup().await;
        let mut basics = valid_intake().basics;
        basics.case_summary = summary(5);
        post_section(&storage, &id, session_keys::BASICS, basics).await;

        let result = runner.run(&id).await.unwrap();
        assert_eq!(result.status, ExecutionStatus::WaitingForInput);

        let session = storage.get(&id).await.unwrap().unwrap();
        let view = build_session_view(runner.graph(), &session).await;
        assert_eq!(view.current_step, step_ids::BASICS);
        assert!(view.errors.contains_key("basics.caseSummary"));
        assert_eq!(view.progress, 25);
    }

    #[tokio::test]
    async fn full_walk_submits_case() {
        let (runner, storage, id) = setup().await;
        let intake = valid_intake();

        post_section(&storage, &id, session_keys::BASICS, &intake.basics).await;
        runner.run(&id).await.unwrap();
        post_section(&storage, &id, session_keys::COUNTERPARTY, &intake.counterparty).await;
        runner.run(&id).await.unwrap();
        post_section(&storage, &id, session_keys::TIER, &intake.tier).await;
        runner.run(&id).await.unwrap();
        post_section(&storage, &id, session_keys::REVIEW, &intake.review).await;
        let result = runner.run(&id).await.unwrap();

        assert_eq!(result.status, ExecutionStatus::Completed);
        let session = storage.get(&id).await.unwrap().unwrap();
        let view = build_session_view(runner.graph(), &session).await;
        assert!(view.completed);
        assert!(view.case_id.unwrap().starts_with("RC-"));
        assert_eq!(view.completed_steps.len(), 4);
        assert_eq!(view.progress, 100);
        assert_eq!(view.data, intake);
    }

    #[tokio::test]
    async fn unconfirmed_review_is_rejected() {
        let (runner, storage, id) = setup().await;
        let intake = valid_intake();
        post_section(&storage, &id, session_keys::BASICS, &intake.basics).await;
        runner.run(&id).await.unwrap();
        post_section(&storage, &id, session_keys::COUNTERPARTY, &intake.counterparty).await;
        runner.run(&id).await.unwrap();
        post_section(&storage, &id, session_keys::TIER, &intake.tier).await;
        runner.run(&id).await.unwrap();

        let result = runner.run(&id).await.unwrap();
        assert_eq!(result.status, ExecutionStatus::WaitingForInput);
        let session = storage.get(&id).await.unwrap().unwrap();
        assert_eq!(session.current_step_id, step_ids::REVIEW);
        assert!(!session.context.contains(session_keys::CASE_ID));
    }

    #[tokio::test]
    async fn failing_again_after_back_clears_completed_mark() {
        let (runner, storage, id) = setup().await;
        let intake = valid_intake();
        post_section(&storage, &id, session_keys::BASICS, &intake.basics).await;
        runner.run(&id).await.unwrap();
        runner.back(&id).await.unwrap();

        let mut basics = intake.basics.clone();
        basics.geography = String::new();
        post_section(&storage, &id, session_keys::BASICS, basics).await;
        runner.run(&id).await.unwrap();

        let session = storage.get(&id).await.unwrap().unwrap();
        let view = build_session_view(runner.graph(), &session).await;
        assert_eq!(view.current_step, step_ids::BASICS);
        assert!(view.errors.contains_key("basics.geography"));
        assert!(view.completed_steps.is_empty());
    }

    #[tokio::test]
    async fn plan_preselects_tier() {
        let session = create_intake_session(Some("recovery")).await.unwrap();
        let tier: TierFormData = session.context.get(session_keys::TIER).await.unwrap();
        assert_eq!(tier.selected_tier, Some(TierKey::Reclamation));

        let session = create_intake_session(Some("platinum")).await.unwrap();
        assert!(!session.context.contains(session_keys::TIER));
    }
}
