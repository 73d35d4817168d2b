use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use crate::{
    context::Context,
    error::{FlowError, Result},
    step::{NextAction, Step, StepResult},
    storage::Session,
};

/// Type alias for edge condition functions
pub type EdgeCondition = Arc<dyn Fn(&Context) -> bool + Send + Sync>;

/// Edge between steps in the graph
#[derive(Clone)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub condition: Option<EdgeCondition>,
}

/// A graph of wizard steps
pub struct Graph {
    pub id: String,
    steps: DashMap<String, Arc<dyn Step>>,
    order: Vec<String>,
    edges: Vec<Edge>,
    start_step_id: Option<String>,
}

impl Graph {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            steps: DashMap::new(),
            order: Vec::new(),
            edges: Vec::new(),
            start_step_id: None,
        }
    }

    /// Run the session's current step and move the session accordingly.
    pub async fn execute_session(&self, session: &mut Session) -> Result<ExecutionResult> {
        let result = self
            .execute_single_step(&session.current_step_id, session.context.clone())
            .await?;

        session.status_message = result.status_message.clone();

        match &result.next_action {
            NextAction::Continue => {
                self.advance(session, &result.step_id);
                Ok(ExecutionResult::waiting(result.response))
            }
            NextAction::ContinueAndExecute => {
                if self.advance(session, &result.step_id) {
                    return Box::pin(self.execute_session(session)).await;
                }
                Ok(ExecutionResult::waiting(result.response))
            }
            NextAction::WaitForInput => {
                session.current_step_id = result.step_id.clone();
                Ok(ExecutionResult::waiting(result.response))
            }
            NextAction::End => {
                session.current_step_id = result.step_id.clone();
                session.completed = true;
                Ok(ExecutionResult {
                    response: result.response,
                    status: ExecutionStatus::Completed,
                })
            }
            NextAction::GoTo(target_id) => {
                if !self.steps.contains_key(target_id) {
                    return Err(FlowError::StepNotFound(target_id.clone()));
                }
                session.history.push(result.step_id.clone());
                session.current_step_id = target_id.clone();
                Ok(ExecutionResult::waiting(result.response))
            }
            NextAction::GoBack => {
                self.step_back(session);
                Ok(ExecutionResult::waiting(result.response))
            }
        }
    }

    /// Return to the previously visited step. Returns `false` at the first step.
    pub fn step_back(&self, session: &mut Session) -> bool {
        match session.history.pop() {
            Some(previous) => {
                debug!(from = %session.current_step_id, to = %previous, "stepping back");
                session.current_step_id = previous;
                session.completed = false;
                true
            }
            None => false,
        }
    }

    /// Moves the session past `from`. Returns `false` when no edge leaves it.
    fn advance(&self, session: &mut Session, from: &str) -> bool {
        match self.find_next_step(from, &session.context) {
            Some(next_step_id) => {
                session.history.push(from.to_string());
                session.current_step_id = next_step_id;
                true
            }
            None => {
                session.current_step_id = from.to_string();
                false
            }
        }
    }

    async fn execute_single_step(&self, step_id: &str, context: Context) -> Result<StepResult> {
        let step = self
            .get_step(step_id)
            .ok_or_else(|| FlowError::StepNotFound(step_id.to_string()))?;

        let mut result = step.run(context).await?;
        result.step_id = step_id.to_string();

        Ok(result)
    }

    /// Find the next step based on edges and conditions
    pub fn find_next_step(&self, current_step_id: &str, context: &Context) -> Option<String> {
        self.edges
            .iter()
            .filter(|edge| edge.from == current_step_id)
            .find(|edge| match &edge.condition {
                Some(condition) => condition(context),
                None => true,
            })
            .map(|edge| edge.to.clone())
    }

    pub fn start_step_id(&self) -> Option<String> {
        self.start_step_id.clone()
    }

    pub fn get_step(&self, step_id: &str) -> Option<Arc<dyn Step>> {
        self.steps.get(step_id).map(|entry| entry.clone())
    }

    /// Step ids in the order they were added
    pub fn step_ids(&self) -> &[String] {
        &self.order
    }

    /// Zero-based position of a step in insertion order
    pub fn position_of(&self, step_id: &str) -> Option<usize> {
        self.order.iter().position(|id| id == step_id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builder for creating graphs
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            graph: Graph::new(id),
        }
    }

    /// Add a step. The first step added becomes the start step.
    pub fn add_step(mut self, step: Arc<dyn Step>) -> Self {
        let step_id = step.id().to_string();
        if self.graph.start_step_id.is_none() {
            self.graph.start_step_id = Some(step_id.clone());
        }
        if self.graph.steps.insert(step_id.clone(), step).is_none() {
            self.graph.order.push(step_id);
        }
        self
    }

    pub fn add_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.graph.edges.push(Edge {
            from: from.into(),
            to: to.into(),
            condition: None,
        });
        self
    }

    pub fn add_conditional_edge<F>(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        condition: F,
    ) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        self.graph.edges.push(Edge {
            from: from.into(),
            to: to.into(),
            condition: Some(Arc::new(condition)),
        });
        self
    }

    /// Ignored when no step with that id has been added.
    pub fn set_start_step(mut self, step_id: impl Into<String>) -> Self {
        let step_id = step_id.into();
        if self.graph.steps.contains_key(&step_id) {
            self.graph.start_step_id = Some(step_id);
        }
        self
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}

/// Outcome of one `execute_session` call
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub response: Option<String>,
    pub status: ExecutionStatus,
}

impl ExecutionResult {
    fn waiting(response: Option<String>) -> Self {
        Self {
            response,
            status: ExecutionStatus::WaitingForInput,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// Waiting for user input to continue
    WaitingForInput,
    /// Wizard completed
    Completed,
}
