// Intake wizard steps, in the order the client walks through them
pub mod basics_step;
pub mod counterparty_step;
pub mod tier_step;
pub mod review_step;

// Shared modules
pub mod types;
pub mod utils;

pub use basics_step::BasicsStepTask;
pub use counterparty_step::CounterpartyStepTask;
pub use review_step::ReviewStepTask;
pub use tier_step::TierStepTask;

pub use types::{session_keys, step_ids};
