pub mod context;
pub mod error;
pub mod graph;
pub mod runner;
pub mod step;
pub mod storage;

// Re-export commonly used types
pub use context::Context;
pub use error::{FlowError, Result};
pub use graph::{ExecutionResult, ExecutionStatus, Graph, GraphBuilder};
pub use runner::FlowRunner;
pub use step::{NextAction, Step, StepResult};
pub use storage::{InMemorySessionStorage, Session, SessionStorage};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Advances only when the context holds `"<id>_ok": true`.
    struct GateStep {
        id: String,
    }

    #[async_trait]
    impl Step for GateStep {
        fn id(&self) -> &str {
            &self.id
        }

        async fn run(&self, context: Context) -> Result<StepResult> {
            let ok: bool = context
                .get(&format!("{}_ok", self.id))
                .await
                .unwrap_or(false);
            if ok {
                Ok(StepResult::new(None, NextAction::Continue))
            } else {
                Ok(StepResult::new(
                    Some(format!("{} needs input", self.id)),
                    NextAction::WaitForInput,
                ))
            }
        }
    }

    struct FinishStep;

    #[async_trait]
    impl Step for FinishStep {
        fn id(&self) -> &str {
            "finish"
        }

        async fn run(&self, _context: Context) -> Result<StepResult> {
            Ok(StepResult::new(Some("done".to_string()), NextAction::End))
        }
    }

    fn gate(id: &str) -> Arc<dyn Step> {
        Arc::new(GateStep { id: id.to_string() })
    }

    fn three_step_graph() -> Graph {
        GraphBuilder::new("test")
            .add_step(gate("first"))
            .add_step(gate("second"))
            .add_step(Arc::new(FinishStep))
            .add_edge("first", "second")
            .add_edge("second", "finish")
            .build()
    }

    #[tokio::test]
    async fn wait_for_input_keeps_current_step() {
        let graph = three_step_graph();
        let mut session = Session::new_from_step("s1".to_string(), "test", "first");

        let result = graph.execute_session(&mut session).await.unwrap();

        assert_eq!(result.status, ExecutionStatus::WaitingForInput);
        assert_eq!(result.response.as_deref(), Some("first needs input"));
        assert_eq!(session.current_step_id, "first");
        assert!(session.history.is_empty());
    }

    #[tokio::test]
    async fn continue_advances_and_back_returns() {
        let graph = three_step_graph();
        let mut session = Session::new_from_step("s1".to_string(), "test", "first");
        session.context.set("first_ok", true).await.unwrap();

        graph.execute_session(&mut session).await.unwrap();
        assert_eq!(session.current_step_id, "second");
        assert_eq!(session.history, vec!["first".to_string()]);

        assert!(graph.step_back(&mut session));
        assert_eq!(session.current_step_id, "first");
        assert!(!graph.step_back(&mut session));
        assert_eq!(session.current_step_id, "first");
    }

    #[tokio::test]
    async fn end_marks_session_completed() {
        let graph = three_step_graph();
        let mut session = Session::new_from_step("s1".to_string(), "test", "first");
        session.context.set("first_ok", true).await.unwrap();
        session.context.set("second_ok", true).await.unwrap();

        graph.execute_session(&mut session).await.unwrap();
        graph.execute_session(&mut session).await.unwrap();
        let result = graph.execute_session(&mut session).await.unwrap();

        assert_eq!(result.status, ExecutionStatus::Completed);
        assert!(session.completed);
        assert_eq!(session.current_step_id, "finish");
    }

    #[tokio::test]
    async fn conditional_edge_picks_first_matching_target() {
        let graph = GraphBuilder::new("branch")
            .add_step(gate("start"))
            .add_step(gate("left"))
            .add_step(gate("right"))
            .add_conditional_edge("start", "left", |ctx| {
                ctx.get_sync::<bool>("go_left").unwrap_or(false)
            })
            .add_edge("start", "right")
            .build();

        let context = Context::new();
        assert_eq!(graph.find_next_step("start", &context).as_deref(), Some("right"));
        context.set("go_left", true).await.unwrap();
        assert_eq!(graph.find_next_step("start", &context).as_deref(), Some("left"));
    }

    #[tokio::test]
    async fn builder_tracks_order_and_start() {
        let graph = three_step_graph();
        assert_eq!(graph.start_step_id().as_deref(), Some("first"));
        assert_eq!(graph.step_ids(), ["first", "second", "finish"]);
        assert_eq!(graph.position_of("finish"), Some(2));
        assert_eq!(graph.len(), 3);
    }

    #[tokio::test]
    async fn runner_persists_between_calls() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let runner = FlowRunner::new(Arc::new(three_step_graph()), storage.clone());

        let session = Session::new_from_step("s1".to_string(), "test", "first");
        session.context.set("first_ok", true).await.unwrap();
        storage.save(session).await.unwrap();

        runner.run("s1").await.unwrap();
        let stored = storage.get("s1").await.unwrap().unwrap();
        assert_eq!(stored.current_step_id, "second");

        let session = runner.back("s1").await.unwrap();
        assert_eq!(session.current_step_id, "first");

        let missing = runner.run("nope").await;
        assert!(matches!(missing, Err(FlowError::SessionNotFound(_))));
    }
}
