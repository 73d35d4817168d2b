use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{context::Context, error::Result};

/// Result of running a step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Message to show the user
    pub response: Option<String>,
    /// What the graph should do next
    pub next_action: NextAction,
    /// Id of the step that produced this result, filled in by the graph
    pub step_id: String,
    /// Short progress note kept on the session
    pub status_message: Option<String>,
}

impl StepResult {
    pub fn new(response: Option<String>, next_action: NextAction) -> Self {
        Self {
            response,
            next_action,
            step_id: String::new(),
            status_message: None,
        }
    }

    pub fn new_with_status(
        response: Option<String>,
        next_action: NextAction,
        status_message: Option<String>,
    ) -> Self {
        Self {
            response,
            next_action,
            step_id: String::new(),
            status_message,
        }
    }
}

/// Defines what should happen after a step completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextAction {
    /// Move to the next step and hand control back to the caller
    Continue,
    /// Move to the next step and run it immediately
    ContinueAndExecute,
    /// Jump to a specific step by id
    GoTo(String),
    /// Return to the previously completed step
    GoBack,
    /// Stay on this step until the caller provides new input
    WaitForInput,
    /// The wizard is finished
    End,
}

/// A single screen of a wizard
#[async_trait]
pub trait Step: Send + Sync {
    fn id(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Human-readable title shown in progress indicators
    fn title(&self) -> &str {
        self.id()
    }

    async fn run(&self, context: Context) -> Result<StepResult>;
}
