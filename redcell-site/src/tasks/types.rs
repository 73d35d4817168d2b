/// Keys under which the wizard keeps its state in the session context
pub mod session_keys {
    pub const BASICS: &str = "basics";
    pub const COUNTERPARTY: &str = "counterparty";
    pub const TIER: &str = "tier";
    pub const REVIEW: &str = "review";
    /// Field path → message for the step currently shown
    pub const STEP_ERRORS: &str = "step_errors";
    pub const COMPLETED_STEPS: &str = "completed_steps";
    pub const CASE_ID: &str = "case_id";
}

pub mod step_ids {
    pub const BASICS: &str = "basics";
    pub const COUNTERPARTY: &str = "counterparty";
    pub const TIER: &str = "tier";
    pub const REVIEW: &str = "review";

    /// Context key holding the answers of a step
    pub fn section_key(step_id: &str) -> Option<&'static str> {
        use super::session_keys;
        match step_id {
            BASICS => Some(session_keys::BASICS),
            COUNTERPARTY => Some(session_keys::COUNTERPARTY),
            TIER => Some(session_keys::TIER),
            REVIEW => Some(session_keys::REVIEW),
            _ => None,
        }
    }
}
