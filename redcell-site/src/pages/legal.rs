use std::fmt::Write;

use super::layout::{PageContext, PageMeta, escape_html, render_page};
use crate::content::legal::{LEGAL_DOCS, LegalDoc, breadcrumbs, featured_docs};
use crate::content::site::LEGAL_ENTITY;

fn render_breadcrumbs(path: &str) -> String {
    let crumbs = breadcrumbs(path);
    let mut nav = String::from("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\"><a href=\"/\">Home</a>");
    for (index, (href, label)) in crumbs.iter().enumerate() {
        if index + 1 == crumbs.len() {
            let _ = write!(nav, " / <span aria-current=\"page\">{}</span>", escape_html(label));
        } else {
            let _ = write!(nav, " / <a href=\"{}\">{}</a>", escape_html(href), escape_html(label));
        }
    }
    nav.push_str("</nav>");
    nav
}

pub fn legal_index_page(ctx: &PageContext) -> String {
    let meta = PageMeta::new(
        "Legal Documents",
        "Terms, Privacy, and Data Processing & GDPR for redcells.vercel.app.",
    );

    let mut body = render_breadcrumbs("/legal");
    body.push_str("<section class=\"legal-index\"><div><h1>Legal Documents</h1><p>Our legal framework ensures transparency and protection for both our clients and our organization. These documents outline the terms of service, privacy practices, and data processing agreements that govern our cross-border fraud intelligence services.</p><p>Last updated summary:</p><ul>");
    for doc in featured_docs() {
        let _ = write!(
            body,
            "<li>{}: {}</li>",
            escape_html(doc.title),
            escape_html(doc.last_updated)
        );
    }
    body.push_str("</ul></div><div class=\"doc-cards\">");
    for doc in featured_docs() {
        body.push_str(&render_doc_card(doc));
    }
    body.push_str("</div></section><section class=\"other-policies\"><h2>Other policies</h2><ul>");
    for doc in LEGAL_DOCS.iter().filter(|d| !featured_docs().any(|f| f.slug == d.slug)) {
        let _ = write!(
            body,
            "<li><a href=\"{}\">{}</a></li>",
            doc.href(),
            escape_html(doc.title)
        );
    }
    body.push_str("</ul></section>");
    render_page(ctx, &meta, &body)
}

fn render_doc_card(doc: &LegalDoc) -> String {
    format!(
        "<article class=\"doc-card\"><h3>{}</h3><p>{}</p><p class=\"updated\">Updated {}</p><a href=\"{}\">Read document</a></article>",
        escape_html(doc.title),
        escape_html(doc.summary),
        escape_html(doc.last_updated),
        doc.href()
    )
}

/// Clears the saved consent and reloads, which brings the banner back.
const COOKIE_PREFERENCES_PANEL: &str = r#"<div class="cookie-manage"><h3>Manage Your Cookie Preferences</h3><p>You can update your cookie preferences at any time by clicking the button below.</p><button type="button" class="btn btn-primary" data-consent-reset>Update Cookie Preferences</button></div>
<script>
document.querySelector("[data-consent-reset]").addEventListener("click", function () {
  fetch("/api/consent", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ action: "reset" })
  }).then(function () { window.location.reload(); });
});
</script>"#;

pub fn legal_doc_page(ctx: &PageContext, doc: &LegalDoc) -> String {
    let meta = PageMeta::new(
        format!("{} | {}", doc.title, LEGAL_ENTITY),
        doc.summary,
    );

    let mut body = render_breadcrumbs(&doc.href());
    body.push_str("<div class=\"legal-layout\"><aside><nav class=\"toc\" aria-label=\"Table of contents\"><p>On this page</p><ul>");
    for section in doc.sections {
        let _ = write!(
            body,
            "<li><a href=\"#{}\">{}</a></li>",
            section.id,
            escape_html(section.title)
        );
    }
    let _ = write!(
        body,
        "</ul></nav><button type=\"button\" onclick=\"window.print()\" aria-label=\"Print or save this page as PDF\">Print / PDF</button></aside><article class=\"legal-doc\"><h1>{}</h1><p class=\"updated\">Last updated: {}</p>",
        escape_html(doc.title),
        escape_html(doc.last_updated)
    );
    if doc.slug == "cookies" {
        body.push_str(COOKIE_PREFERENCES_PANEL);
    }
    for section in doc.sections {
        let _ = write!(
            body,
            "<section id=\"{}\"><h2>{}</h2>",
            section.id,
            escape_html(section.title)
        );
        for paragraph in section.paragraphs {
            let _ = write!(body, "<p>{}</p>", escape_html(paragraph));
        }
        if !section.items.is_empty() {
            body.push_str("<ul>");
            for item in section.items {
                let _ = write!(body, "<li>{}</li>", escape_html(item));
            }
            body.push_str("</ul>");
        }
        body.push_str("</section>");
    }
    body.push_str("</article></div>");
    render_page(ctx, &meta, &body)
}
