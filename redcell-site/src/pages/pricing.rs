use std::fmt::Write;

use super::layout::{PageContext, PageMeta, escape_html, render_page};
use crate::content::pricing::{ButtonVariant, PRICING_TIERS, PricingTier};
use crate::content::site::{HOW_IT_WORKS, USE_CASES};

fn render_tier(tier: &PricingTier) -> String {
    let mut card = String::new();
    let _ = write!(
        card,
        "<article class=\"tier{}\" id=\"tier-{}\">",
        if tier.is_popular { " tier-popular" } else { "" },
        tier.key.as_str()
    );
    if tier.is_popular {
        card.push_str("<span class=\"badge\">Most popular</span>");
    }
    let _ = write!(
        card,
        "<h3>{}</h3><p class=\"price\">{}</p><p class=\"turnaround\">Turnaround: {}</p>",
        escape_html(tier.name()),
        escape_html(tier.price),
        escape_html(tier.turnaround)
    );
    card.push_str("<ul class=\"features\">");
    for feature in tier.features {
        let _ = write!(card, "<li>{}</li>", escape_html(feature));
    }
    card.push_str("</ul>");
    // description is trusted markup
    let _ = write!(card, "<p class=\"description\">{}</p>", tier.description);
    if !tier.use_cases.is_empty() {
        card.push_str("<p class=\"use-cases-title\">Use cases</p><ul class=\"use-cases\">");
        for use_case in tier.use_cases {
            let _ = write!(card, "<li>{}</li>", escape_html(use_case));
        }
        card.push_str("</ul>");
    }
    let _ = write!(
        card,
        "<a class=\"btn {}\" href=\"{}\" data-cta=\"run_check\">{}</a></article>",
        match tier.button_variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Link => "btn-link",
        },
        escape_html(&tier.button_link()),
        escape_html(tier.button_text)
    );
    card
}

/// The tier grid, shared by the home and pricing pages
pub fn render_pricing_section() -> String {
    let mut section = String::from(
        "<section class=\"pricing\" id=\"pricing\" aria-labelledby=\"pricing-title\"><h2 id=\"pricing-title\">Choose your level of intelligence</h2><div class=\"tier-grid\">",
    );
    for tier in PRICING_TIERS.iter() {
        section.push_str(&render_tier(tier));
    }
    section.push_str("</div></section>");
    section
}

pub fn render_how_it_works() -> String {
    let mut section = String::from(
        "<section class=\"how-it-works\" id=\"how-it-works\"><h2>How it works</h2><p class=\"lead\">From submission to actionable intelligence.</p><ol class=\"steps\">",
    );
    for step in HOW_IT_WORKS {
        let _ = write!(
            section,
            "<li><h3>{}</h3><p>{}</p></li>",
            escape_html(step.title),
            escape_html(step.description)
        );
    }
    section.push_str("</ol></section>");
    section
}

pub fn pricing_page(ctx: &PageContext) -> String {
    let meta = PageMeta::new(
        "Pricing",
        "Fixed-price fraud intelligence reports, from a two-hour technical analysis to full reclamation operations.",
    );
    let body = format!(
        "<section class=\"page-hero\"><h1>Pricing</h1><p>Pick the depth of investigation that matches what is at stake.</p></section>{}<section class=\"cta\"><p>Not sure which tier fits? <a href=\"/contact\" data-cta=\"talk_to_sales\">Talk to an analyst</a>.</p></section>",
        render_pricing_section()
    );
    render_page(ctx, &meta, &body)
}

pub fn services_page(ctx: &PageContext) -> String {
    let meta = PageMeta::new(
        "Services",
        "Counterparty vetting, red-flag reviews, frozen-funds release paths and cross-border asset recovery.",
    );
    let mut body = String::from(
        "<section class=\"page-hero\"><h1>Services</h1><p>AI-assisted scanning validated by human analysts, delivered as a brief you can act on.</p></section>",
    );
    body.push_str("<section class=\"use-cases\"><h2>What we handle</h2><ul>");
    for use_case in USE_CASES {
        let _ = write!(body, "<li>{}</li>", escape_html(use_case));
    }
    body.push_str("</ul></section>");
    body.push_str(&render_how_it_works());

    body.push_str("<section class=\"tier-summary\"><h2>Engagement tiers</h2><dl>");
    for tier in PRICING_TIERS.iter() {
        let _ = write!(
            body,
            "<dt><a href=\"/pricing#tier-{}\">{}</a></dt><dd>{} &middot; {}</dd>",
            tier.key.as_str(),
            escape_html(tier.name()),
            escape_html(tier.price),
            escape_html(tier.turnaround)
        );
    }
    body.push_str("</dl><a class=\"btn btn-primary\" href=\"/submit\" data-cta=\"run_check\">Run a Check</a></section>");
    render_page(ctx, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_lists_every_tier_with_start_links() {
        let html = pricing_page(&PageContext::new("/pricing", "", false));
        for plan in ["technical", "tactical", "strategic", "recovery"] {
            assert!(html.contains(&format!("/start-investigation?plan={}", plan)));
        }
        assert!(html.contains("Most popular"));
        assert!(html.contains("Custom Quote"));
    }

    #[test]
    fn services_show_process_steps() {
        let html = services_page(&PageContext::new("/services", "", false));
        assert!(html.contains("Human Analyst Validation"));
        assert!(html.contains("/pricing#tier-reclamation"));
    }
}
