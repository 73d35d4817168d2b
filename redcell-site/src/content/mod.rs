//! Static copy rendered by the page templates.

pub mod blog;
pub mod cases;
pub mod faq;
pub mod legal;
pub mod pricing;
pub mod site;
