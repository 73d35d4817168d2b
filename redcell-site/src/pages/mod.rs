//! Server-rendered HTML for every public route.

pub mod blog;
pub mod cases;
pub mod contact;
pub mod faq;
pub mod home;
pub mod intake;
pub mod layout;
pub mod legal;
pub mod pricing;
pub mod trust;

pub use blog::{BlogQuery, blog_listing_page, blog_post_page, unfiltered_page_count};
pub use cases::cases_page;
pub use contact::{ContactQuery, contact_page};
pub use faq::{FaqQuery, faq_page};
pub use home::home_page;
pub use intake::{PlanQuery, ThankYouQuery, start_investigation_page, submit_page, thank_you_page};
pub use layout::{PageContext, PageMeta, escape_html, render_page};
pub use legal::{legal_doc_page, legal_index_page};
pub use pricing::{pricing_page, services_page};
pub use trust::trust_center_page;

pub fn not_found_page(ctx: &PageContext) -> String {
    let meta = PageMeta::new("Page Not Found", "The page you are looking for does not exist.").noindex();
    render_page(
        ctx,
        &meta,
        "<section class=\"not-found\"><h1>404</h1><p>The page you are looking for does not exist or has moved.</p><a class=\"btn btn-primary\" href=\"/\">Back to Home</a> <a class=\"btn\" href=\"/contact\">Contact Support</a></section>",
    )
}
