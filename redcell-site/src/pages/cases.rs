use std::fmt::Write;

use super::layout::{PageContext, PageMeta, escape_html, render_page};
use crate::content::cases::CASE_STUDIES;

pub fn cases_page(ctx: &PageContext) -> String {
    let meta = PageMeta::new(
        "Case Studies",
        "Selected cross-border investigations: recoveries, verifications, supplier due diligence and fraud network takedowns.",
    );

    let mut body = String::from(
        "<section class=\"page-hero\"><h1>Case Studies</h1><p>Anonymized engagements showing the problem, what we did and what it changed.</p></section><section class=\"case-list\">",
    );
    for case in CASE_STUDIES {
        let _ = write!(
            body,
            "<article class=\"case\"><span class=\"badge\">{badge}</span><h2>{title}</h2><p class=\"subtitle\">{subtitle}</p><dl><dt>Problem</dt><dd>{problem}</dd><dt>Action</dt><dd>{action}</dd><dt>Impact</dt><dd>{impact}</dd></dl></article>",
            badge = escape_html(case.badge),
            title = escape_html(case.title),
            subtitle = escape_html(case.subtitle),
            problem = escape_html(case.problem),
            action = escape_html(case.action),
            impact = escape_html(case.impact),
        );
    }
    body.push_str("</section><section class=\"cta\"><h2>Facing something similar?</h2><a class=\"btn btn-primary\" href=\"/submit\" data-cta=\"run_check\">Run a Check</a></section>");
    render_page(ctx, &meta, &body)
}
