use serde::Deserialize;
use serde_json::{Value, json};
use std::fmt::Write;

use super::layout::{PageContext, PageMeta, escape_html, render_page};
use crate::content::faq::{FAQ_CATEGORIES, search_faq, total_entries};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqQuery {
    pub q: Option<String>,
}

pub fn faq_page(ctx: &PageContext, query: &FaqQuery) -> String {
    let search = query.q.as_deref().map(str::trim).unwrap_or("");
    let results = search_faq(search);
    let shown: usize = results.iter().map(|(_, entries)| entries.len()).sum();

    let questions: Vec<Value> = FAQ_CATEGORIES
        .iter()
        .flat_map(|category| category.entries.iter())
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {"@type": "Answer", "text": entry.answer},
            })
        })
        .collect();
    let meta = PageMeta::new(
        "FAQ",
        "Answers about our fraud intelligence services, engagement process and outcomes.",
    )
    .with_structured_data(json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    }));

    let mut body = String::new();
    let _ = write!(
        body,
        "<section class=\"page-hero\"><h1>Frequently Asked Questions</h1><p>Everything you need to know about working with us.</p></section><form class=\"faq-search\" method=\"get\" action=\"/faq\" role=\"search\"><input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search questions...\" aria-label=\"Search frequently asked questions\"></form>",
        escape_html(search)
    );

    if !search.is_empty() {
        let _ = write!(
            body,
            "<p class=\"results-count\">Showing {} of {} questions</p>",
            shown,
            total_entries()
        );
    }

    if results.is_empty() {
        let _ = write!(
            body,
            "<section class=\"empty\"><h2>No results found</h2><p>No questions match &quot;{}&quot;. Try different keywords or <a href=\"/contact\">contact us</a> directly.</p><a class=\"btn\" href=\"/faq\">Clear search</a></section>",
            escape_html(search)
        );
        return render_page(ctx, &meta, &body);
    }

    for (category, entries) in results {
        let _ = write!(body, "<section class=\"faq-category\"><h2>{}</h2>", escape_html(category));
        for entry in entries {
            // answers are trusted markup with line breaks
            let _ = write!(
                body,
                "<details id=\"{}\"{}><summary>{}</summary><div class=\"answer\">{}</div></details>",
                entry.id,
                if search.is_empty() { "" } else { " open" },
                escape_html(entry.question),
                entry.answer
            );
        }
        body.push_str("</section>");
    }
    body.push_str("<section class=\"cta\"><h2>Still have questions?</h2><a class=\"btn btn-primary\" href=\"/contact\" data-cta=\"talk_to_sales\">Contact us</a></section>");
    render_page(ctx, &meta, &body)
}
