//! `FlowRunner` loads a session, executes exactly one step, and persists the updated session.
//!
//! Web handlers usually want one step per request: the user posts the answers for the
//! current screen, the step validates them, and the response tells the client which screen
//! to render next. `FlowRunner` wraps that load → execute → save round trip, and the matching
//! load → step back → save round trip for the "Previous" button.
//!
//! Use `Graph::execute_session` directly when several steps should run before a single save.

use std::sync::Arc;

use crate::{
    error::{FlowError, Result},
    graph::{ExecutionResult, Graph},
    storage::{Session, SessionStorage},
};

/// Shared, cheaply clonable handle over a graph and its session storage.
#[derive(Clone)]
pub struct FlowRunner {
    graph: Arc<Graph>,
    storage: Arc<dyn SessionStorage>,
}

impl FlowRunner {
    pub fn new(graph: Arc<Graph>, storage: Arc<dyn SessionStorage>) -> Self {
        Self { graph, storage }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Execute **exactly one** step for the given `session_id` and persist the session.
    pub async fn run(&self, session_id: &str) -> Result<ExecutionResult> {
        let mut session = self.load(session_id).await?;
        let result = self.graph.execute_session(&mut session).await?;
        self.storage.save(session).await?;
        Ok(result)
    }

    /// Move the session back one step. Returns the session as saved.
    pub async fn back(&self, session_id: &str) -> Result<Session> {
        let mut session = self.load(session_id).await?;
        self.graph.step_back(&mut session);
        self.storage.save(session.clone()).await?;
        Ok(session)
    }

    async fn load(&self, session_id: &str) -> Result<Session> {
        self.storage
            .get(session_id)
            .await?
            .ok_or_else(|| FlowError::SessionNotFound(session_id.to_string()))
    }
}
