use std::fmt::Write;
use std::sync::LazyLock;

use super::layout::{PageContext, PageMeta, escape_html, render_page};
use super::pricing::{render_how_it_works, render_pricing_section};
use crate::content::cases::CASE_STUDIES;
use crate::content::site::{SITE_DESCRIPTION, TRUST_BADGES};
use crate::network::NetworkMap;

static HERO_BACKGROUND: LazyLock<String> = LazyLock::new(|| NetworkMap::default().to_svg());

const QUICK_STATS: [(&str, &str); 3] = [
    ("30+", "Jurisdictions Monitored"),
    ("100+", "Registries Tracked"),
    ("48h", "Average Turnaround"),
];

const USE_CASE_STRIP: [(&str, &str); 3] = [
    (
        "Counterparty Vetting Before You Pay",
        "Find hidden shell networks & director fraud in 24 h.",
    ),
    (
        "Red-Flag Review After Funds Sent",
        "Diagnose anomalies & decide next tactical move.",
    ),
    (
        "Frozen Funds & OFAC Holds",
        "Map the fastest release path from banks or crypto exchanges.",
    ),
];

pub fn home_page(ctx: &PageContext) -> String {
    let meta = PageMeta::new("", SITE_DESCRIPTION).with_structured_data(serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "RedCellAdvisory",
        "url": ctx.site_url,
        "description": SITE_DESCRIPTION,
    }));

    let mut body = String::new();
    let _ = write!(
        body,
        "<section class=\"hero\"><div class=\"hero-background\">{}</div><div class=\"hero-content\"><h1>Stop cross-border fraud</h1><p>{}</p><div class=\"hero-actions\"><a class=\"btn btn-primary\" href=\"/start-investigation\" data-cta=\"run_check\">Start an Investigation</a><a class=\"btn btn-link\" href=\"#how-it-works\">See How It Works</a></div><ul class=\"trust-badges\">",
        HERO_BACKGROUND.as_str(),
        escape_html(SITE_DESCRIPTION)
    );
    for badge in TRUST_BADGES {
        let _ = write!(body, "<li>{}</li>", escape_html(badge));
    }
    body.push_str("</ul></div></section>");

    body.push_str("<section class=\"quick-stats\"><dl>");
    for (number, label) in QUICK_STATS {
        let _ = write!(body, "<div><dt>{}</dt><dd>{}</dd></div>", number, escape_html(label));
    }
    body.push_str("</dl></section>");

    body.push_str("<section class=\"use-case-strip\">");
    for (title, description) in USE_CASE_STRIP {
        let _ = write!(
            body,
            "<article><h3>{}</h3><p>{}</p></article>",
            escape_html(title),
            escape_html(description)
        );
    }
    body.push_str("</section>");

    body.push_str(&render_how_it_works());
    body.push_str(&render_pricing_section());

    body.push_str("<section class=\"case-teaser\"><h2>Recent outcomes</h2><div class=\"case-grid\">");
    for case in CASE_STUDIES.iter().take(3) {
        let _ = write!(
            body,
            "<article><span class=\"badge\">{}</span><h3>{}</h3><p>{}</p></article>",
            escape_html(case.badge),
            escape_html(case.title),
            escape_html(case.subtitle)
        );
    }
    body.push_str("</div><a href=\"/cases\">All case studies</a></section>");

    body.push_str("<section class=\"mission\"><h2>Our Mission &amp; Vision</h2><p>Powered by Seraphim Core™, our mission is to transform risk into actionable intelligence. We deliver fast, verifiable, source-linked insights that help global businesses verify partners, prevent fraud, and recover value.</p></section>");
    render_page(ctx, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_has_hero_network_and_pricing() {
        let html = home_page(&PageContext::new("/", "https://x.test", true));
        assert!(html.contains("Stop cross-border fraud"));
        assert!(html.contains("class=\"network-map\""));
        assert!(html.contains("id=\"pricing\""));
        assert!(html.contains("Faster freezes &amp; disclosures"));
        assert!(html.contains("cookie-banner"));
    }
}
