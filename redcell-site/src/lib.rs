pub mod analytics;
pub mod case_id;
pub mod config;
pub mod consent;
pub mod content;
pub mod maps;
pub mod models;
pub mod network;
pub mod pages;
pub mod service;
pub mod sitemap;
pub mod submission;
pub mod tasks;
pub mod validation;
pub mod workflow;

pub use config::{LogFormat, SiteConfig};
pub use service::{AppState, build_router, create_app};
pub use submission::{CaseSubmitter, MockCaseSubmitter};
pub use workflow::{build_intake_workflow, create_flow_runner, create_intake_session};
