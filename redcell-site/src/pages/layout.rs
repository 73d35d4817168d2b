//! Shared page chrome: head, navigation, footer and the cookie banner.

use chrono::{Datelike, Utc};
use serde_json::Value;
use std::fmt::Write;

use crate::content::site::{
    CONTACT_EMAIL, FOOTER_LEGAL_LINKS, FOOTER_LINKS, LEGAL_ENTITY, NAV_LINKS, SHORT_NAME,
    SITE_DESCRIPTION, SITE_NAME,
};

/// Per-request facts every page needs
#[derive(Debug, Clone)]
pub struct PageContext {
    pub path: String,
    pub site_url: String,
    pub show_consent_banner: bool,
}

impl PageContext {
    pub fn new(path: impl Into<String>, site_url: impl Into<String>, show_consent_banner: bool) -> Self {
        Self {
            path: path.into(),
            site_url: site_url.into(),
            show_consent_banner,
        }
    }

    pub fn canonical_url(&self) -> String {
        format!("{}{}", self.site_url, self.path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    /// Empty for the site-wide title
    pub title: String,
    pub description: String,
    pub structured_data: Option<Value>,
    pub noindex: bool,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_structured_data(mut self, data: Value) -> Self {
        self.structured_data = Some(data);
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }

    fn full_title(&self) -> String {
        if self.title.is_empty() {
            SITE_NAME.to_string()
        } else {
            format!("{} | {}", self.title, SHORT_NAME)
        }
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reports clicks on `data-cta` links. The server drops them without performance consent.
const CTA_SCRIPT: &str = r#"<script>
document.addEventListener("click", function (event) {
  var link = event.target.closest("[data-cta]");
  if (!link || !navigator.sendBeacon) return;
  var body = JSON.stringify({
    name: link.getAttribute("data-cta"),
    properties: { page_location: window.location.pathname }
  });
  navigator.sendBeacon("/api/events", new Blob([body], { type: "application/json" }));
});
</script>
"#;

/// JSON for a `<script>` block; `</` cannot close the tag early
pub(crate) fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

pub fn render_page(ctx: &PageContext, meta: &PageMeta, body: &str) -> String {
    let description = if meta.description.is_empty() {
        SITE_DESCRIPTION
    } else {
        meta.description.as_str()
    };

    let mut html = String::with_capacity(body.len() + 8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&meta.full_title()));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(description)
    );
    let _ = writeln!(
        html,
        "<link rel=\"canonical\" href=\"{}\">",
        escape_html(&ctx.canonical_url())
    );
    let _ = writeln!(
        html,
        "<meta property=\"og:title\" content=\"{}\">\n<meta property=\"og:description\" content=\"{}\">",
        escape_html(&meta.full_title()),
        escape_html(description)
    );
    if meta.noindex {
        html.push_str("<meta name=\"robots\" content=\"noindex\">\n");
    }
    if let Some(data) = &meta.structured_data {
        let _ = writeln!(
            html,
            "<script type=\"application/ld+json\">{}</script>",
            script_json(data)
        );
    }
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/site.css\">\n</head>\n<body>\n");
    html.push_str("<a class=\"skip-link\" href=\"#main\">Skip to content</a>\n");
    html.push_str(&render_nav(&ctx.path));
    let _ = writeln!(html, "<main id=\"main\">\n{}\n</main>", body);
    html.push_str(&render_footer());
    if ctx.show_consent_banner {
        html.push_str(&render_consent_banner());
    }
    html.push_str(CTA_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

fn is_active(current: &str, href: &str) -> bool {
    current == href || current.starts_with(&format!("{}/", href))
}

fn render_nav(current_path: &str) -> String {
    let mut nav = String::from(
        "<header class=\"site-header\"><nav aria-label=\"Main\"><a class=\"brand\" href=\"/\">RedCellAdvisory</a><ul>",
    );
    for link in NAV_LINKS {
        let current = if is_active(current_path, link.href) {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = write!(
            nav,
            "<li><a href=\"{}\"{}>{}</a></li>",
            link.href,
            current,
            escape_html(link.label)
        );
    }
    nav.push_str("</ul><a class=\"btn btn-primary\" href=\"/submit\" data-cta=\"run_check\">Run a Check</a></nav></header>\n");
    nav
}

fn render_footer() -> String {
    let mut footer = String::from("<footer class=\"site-footer\"><div class=\"footer-grid\">");
    let _ = write!(
        footer,
        "<div><p class=\"brand\">RedCellAdvisory</p><p>{}</p><p><a href=\"mailto:{email}\">{email}</a></p></div>",
        escape_html(SITE_DESCRIPTION),
        email = CONTACT_EMAIL
    );

    footer.push_str("<div><h2>Company</h2><ul>");
    for link in FOOTER_LINKS {
        let _ = write!(footer, "<li><a href=\"{}\">{}</a></li>", link.href, escape_html(link.label));
    }
    footer.push_str("<li><a href=\"/trust-center\">Trust Center</a></li></ul></div>");

    footer.push_str("<div><h2>Legal</h2><ul>");
    for link in FOOTER_LEGAL_LINKS {
        let _ = write!(footer, "<li><a href=\"{}\">{}</a></li>", link.href, escape_html(link.label));
    }
    footer.push_str("</ul></div></div>");

    let _ = write!(
        footer,
        "<p class=\"copyright\">&copy; {} {}. All rights reserved.</p></footer>\n",
        Utc::now().year(),
        escape_html(LEGAL_ENTITY)
    );
    footer
}

fn render_consent_banner() -> String {
    r#"<div class="cookie-banner" role="dialog" aria-live="polite" aria-label="Cookie consent">
<p>We use cookies to run this site and, with your permission, to measure and improve it. See our <a href="/legal/cookies">Cookie Policy</a>.</p>
<form class="cookie-preferences" hidden>
<label><input type="checkbox" name="essential" checked disabled> Essential</label>
<label><input type="checkbox" name="performance"> Performance</label>
<label><input type="checkbox" name="functional"> Functional</label>
<label><input type="checkbox" name="marketing"> Marketing</label>
</form>
<div class="cookie-actions">
<button type="button" data-consent="essential_only">Essential only</button>
<button type="button" data-consent="customize">Customize</button>
<button type="button" data-consent="accept_all" class="btn btn-primary">Accept all</button>
</div>
</div>
<script>
(function () {
  var banner = document.querySelector(".cookie-banner");
  if (!banner) return;
  var form = banner.querySelector(".cookie-preferences");
  banner.addEventListener("click", function (event) {
    var action = event.target.getAttribute("data-consent");
    if (!action) return;
    if (action === "customize" && form.hidden) {
      form.hidden = false;
      event.target.textContent = "Save preferences";
      return;
    }
    var body = { action: action === "customize" ? "custom" : action };
    if (body.action === "custom") {
      body.preferences = {
        essential: true,
        performance: form.performance.checked,
        functional: form.functional.checked,
        marketing: form.marketing.checked
      };
    }
    fetch("/api/consent", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body)
    }).then(function () { banner.remove(); });
  });
})();
</script>
"#
    .to_string()
}
