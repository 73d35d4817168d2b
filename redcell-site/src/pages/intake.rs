//! Intake pages: the quick start form, the multi-step wizard shell and the confirmation.

use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Write;

use super::layout::{PageContext, PageMeta, escape_html, render_page, script_json};
use crate::content::site::CASE_EMAIL;
use crate::models::{EntityType, Scenario, TierKey, Urgency};
use crate::validation::{ALLOWED_FILE_TYPES, MAX_FILES, MAX_SUMMARY_WORDS, MIN_SUMMARY_WORDS};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanQuery {
    pub plan: Option<String>,
}

impl PlanQuery {
    /// Unknown plans fall back to the technical tier
    pub fn tier(&self) -> TierKey {
        self.plan
            .as_deref()
            .and_then(TierKey::from_plan)
            .unwrap_or(TierKey::Technical)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThankYouQuery {
    #[serde(rename = "case")]
    pub case_id: Option<String>,
}

fn tier_summary(key: TierKey) -> (&'static str, &'static [&'static str]) {
    match key {
        TierKey::Technical => (
            "Quick technical assessment and red-flag identification",
            &["Domain & IP analysis", "Basic OSINT screening", "Technical red flags", "Preliminary risk assessment"],
        ),
        TierKey::Tactical => (
            "Comprehensive counterparty investigation",
            &["Deep entity verification", "Financial background check", "Regulatory compliance review", "Network analysis", "Actionable recommendations"],
        ),
        TierKey::Strategic => (
            "Full-spectrum intelligence and risk assessment",
            &["Complete corporate structure", "Beneficial ownership mapping", "Sanctions & PEP screening", "Litigation & adverse media", "Strategic risk mitigation plan"],
        ),
        TierKey::Reclamation => (
            "Active recovery and asset tracing operations",
            &["Asset tracing & recovery", "Legal pathway analysis", "Enforcement coordination", "Cross-border litigation support", "Recovery strategy execution"],
        ),
    }
}

fn review_tier_label(key: TierKey) -> &'static str {
    match key {
        TierKey::Technical => "Technical Analysis (USD 200, 2–4h)",
        TierKey::Tactical => "Tactical Probe (from USD 2,000, 1–2 days)",
        TierKey::Strategic => "Strategic Due Diligence (from USD 10,000, 1–2 weeks)",
        TierKey::Reclamation => "Reclamation Ops (Custom Quote)",
    }
}

pub fn start_investigation_page(ctx: &PageContext, query: &PlanQuery) -> String {
    let meta = PageMeta::new(
        "Start an Investigation",
        "Provide key details and attach any supporting files. We'll review and follow up fast.",
    )
    .noindex();
    let selected = query.tier();

    let mut body = String::from(
        "<section class=\"start\"><a class=\"back\" href=\"/pricing\" aria-label=\"Back to pricing\">Back to Pricing</a><h1>Start an Investigation</h1><p>Provide key details and attach any supporting files. We'll review and follow up fast.</p><form id=\"quick-start\" novalidate><div role=\"radiogroup\" aria-label=\"Investigation tier selection\">",
    );
    for key in TierKey::ALL {
        let plan = if key == TierKey::Reclamation { "recovery" } else { key.as_str() };
        let _ = write!(
            body,
            "<label class=\"plan-option\"><input type=\"radio\" name=\"plan\" value=\"{}\"{}> {}</label>",
            plan,
            if key == selected { " checked" } else { "" },
            escape_html(key.name())
        );
    }
    body.push_str(r#"</div>
<label for="fullName">Full name *</label><input id="fullName" name="fullName" required autocomplete="name"><p class="field-error" data-error-for="fullName"></p>
<label for="email">Work email *</label><input id="email" name="email" type="email" required autocomplete="email"><p class="field-error" data-error-for="email"></p>
<label for="company">Company</label><input id="company" name="company" autocomplete="organization">
<label for="summary">Short summary *</label><textarea id="summary" name="summary" rows="5" required></textarea>
<label for="docs">Supporting documents</label><input id="docs" name="docs" type="file" multiple>
<button type="submit" class="btn btn-primary">Submit</button>
</form>
<div class="confirmation" hidden><h2>Request received</h2><p>Your case ID is <strong class="case-id"></strong>. A specialist will contact you shortly.</p><a class="btn" href="/">Back to Home</a> <a class="btn" href="/contact">Contact Support</a></div>
</section>
<script>
(function () {
  var form = document.getElementById("quick-start");
  var done = document.querySelector(".start .confirmation");
  form.addEventListener("submit", function (event) {
    event.preventDefault();
    var data = new FormData(form);
    var payload = {
      plan: data.get("plan"),
      fullName: data.get("fullName"),
      email: data.get("email"),
      company: data.get("company"),
      summary: data.get("summary"),
      docs: Array.prototype.map.call(form.docs.files, function (f) {
        return { name: f.name, size: f.size, type: f.type, lastModified: f.lastModified };
      })
    };
    form.querySelectorAll("[data-error-for]").forEach(function (el) { el.textContent = ""; });
    fetch("/api/start-investigation", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(payload)
    }).then(function (res) { return res.json(); }).then(function (body) {
      if (body.ok) {
        form.hidden = true;
        done.hidden = false;
        done.querySelector(".case-id").textContent = body.id;
        return;
      }
      Object.keys(body.fields || {}).forEach(function (key) {
        var slot = form.querySelector('[data-error-for="' + key + '"]');
        if (slot) slot.textContent = body.fields[key];
      });
    });
  });
})();
</script>"#);
    render_page(ctx, &meta, &body)
}

fn render_options<T: Copy>(items: &[T], value: impl Fn(T) -> &'static str, label: impl Fn(T) -> &'static str) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "<option value=\"{}\">{}</option>",
                value(*item),
                escape_html(label(*item))
            )
        })
        .collect()
}

fn render_basics_form() -> String {
    format!(
        r#"<form class="wizard-step" data-step="basics" hidden novalidate>
<h2>Basics</h2>
<label for="scenario">Scenario</label><select id="scenario" name="scenario" data-kind="nullable"><option value="">Select scenario</option>{scenarios}</select><p class="field-error" data-error-for="basics.scenario"></p>
<label for="geography">Geography</label><input id="geography" name="geography" placeholder="e.g., US-China, EU-Singapore, Global"><p class="field-error" data-error-for="basics.geography"></p>
<label for="amountAtRisk">Amount at Risk</label><input id="amountAtRisk" name="amountAtRisk" placeholder="e.g., $50,000 USD, €25,000 EUR">
<label for="urgency">Urgency</label><select id="urgency" name="urgency" data-kind="nullable"><option value="">Select urgency level</option>{urgencies}</select><p class="field-error" data-error-for="basics.urgency"></p>
<label for="caseSummary">Case Summary</label><textarea id="caseSummary" name="caseSummary" rows="8" placeholder="Describe your situation in detail ({min}-{max} words)..."></textarea><p class="word-count" data-word-count-for="caseSummary"></p><p class="field-error" data-error-for="basics.caseSummary"></p>
</form>"#,
        scenarios = render_options(&Scenario::ALL, |s| s.as_str(), |s| s.label()),
        urgencies = render_options(&Urgency::ALL, |u| u.as_str(), |u| u.label()),
        min = MIN_SUMMARY_WORDS,
        max = MAX_SUMMARY_WORDS,
    )
}

fn render_counterparty_form() -> String {
    format!(
        r#"<form class="wizard-step" data-step="counterparty" hidden novalidate>
<h2>Counterparty</h2>
<label for="entityType">Entity Type</label><select id="entityType" name="entityType" data-kind="nullable"><option value="">Select entity type</option>{entities}</select><p class="field-error" data-error-for="counterparty.entityType"></p>
<label for="nameOrHandle">Name / Organization / Handle</label><input id="nameOrHandle" name="nameOrHandle" placeholder="e.g., ABC Trading Ltd, John Smith, @username"><p class="field-error" data-error-for="counterparty.nameOrHandle"></p>
<label for="website">Website / Domain (Optional)</label><input id="website" name="website" data-kind="nullable" placeholder="https://example.com"><p class="field-error" data-error-for="counterparty.website"></p>
<label><input type="checkbox" name="contactedBefore" data-kind="bool"> Have you contacted them before?</label>
<label for="files">Evidence Upload</label><input id="files" name="files" type="file" multiple accept="{accept}" data-kind="files"><p class="hint">Accept: PDF, PNG, JPG &bull; Up to {max_files} files &bull; Max 20MB per file</p><ul class="file-list"></ul><p class="field-error" data-error-for="counterparty.files"></p>
</form>"#,
        entities = render_options(&EntityType::ALL, |e| e.as_str(), |e| e.label()),
        accept = ALLOWED_FILE_TYPES.join(","),
        max_files = MAX_FILES,
    )
}

fn render_tier_form() -> String {
    let mut form = String::from(
        "<form class=\"wizard-step\" data-step=\"tier\" hidden novalidate><h2>Select Intelligence Tier</h2><div role=\"radiogroup\">",
    );
    for key in TierKey::ALL {
        let (summary, features) = tier_summary(key);
        let _ = write!(
            form,
            "<label class=\"tier-option\"><input type=\"radio\" name=\"selectedTier\" value=\"{}\"> <strong>{}</strong>{}<span>{}</span><ul>",
            key.as_str(),
            escape_html(key.name()),
            if key == TierKey::Tactical { " <span class=\"badge\">Most Popular</span>" } else { "" },
            escape_html(summary)
        );
        for feature in features {
            let _ = write!(form, "<li>{}</li>", escape_html(feature));
        }
        form.push_str("</ul></label>");
    }
    form.push_str("</div><p class=\"field-error\" data-error-for=\"tier.selectedTier\"></p></form>");
    form
}

fn render_review_form() -> String {
    format!(
        r#"<form class="wizard-step" data-step="review" hidden novalidate>
<h2>Review</h2>
<dl class="review-summary"></dl>
<label><input type="checkbox" name="confirmAccuracy" data-kind="bool"> I confirm the information provided is accurate</label><p class="field-error" data-error-for="review.confirmAccuracy"></p>
<a href="mailto:{email}">Save &amp; Contact Me Instead</a>
</form>"#,
        email = CASE_EMAIL
    )
}

pub fn submit_page(ctx: &PageContext, query: &PlanQuery) -> String {
    let meta = PageMeta::new(
        "Submit a Case",
        "Tell us about the counterparty and the transaction. Our analysts review every case.",
    );

    let scenario: BTreeMap<&str, &str> = Scenario::ALL.iter().map(|s| (s.as_str(), s.label())).collect();
    let urgency: BTreeMap<&str, &str> = Urgency::ALL.iter().map(|u| (u.as_str(), u.label())).collect();
    let entity_type: BTreeMap<&str, &str> = EntityType::ALL.iter().map(|e| (e.as_str(), e.label())).collect();
    let tier: BTreeMap<&str, &str> = TierKey::ALL
        .iter()
        .map(|t| (t.as_str(), review_tier_label(*t)))
        .collect();
    let labels = json!({
        "scenario": scenario,
        "urgency": urgency,
        "entityType": entity_type,
        "tier": tier,
    });

    let mut body = String::new();
    let _ = write!(
        body,
        "<section class=\"wizard\" id=\"intake-wizard\" data-plan=\"{}\"><h1>Submit a Case</h1><ol class=\"wizard-steps\" aria-label=\"Progress\"></ol><div class=\"progress\" role=\"progressbar\" aria-valuemin=\"0\" aria-valuemax=\"100\" aria-valuenow=\"0\"><span></span></div><p class=\"wizard-message\" role=\"status\" aria-live=\"polite\"></p>",
        escape_html(query.plan.as_deref().unwrap_or(""))
    );
    body.push_str(&render_basics_form());
    body.push_str(&render_counterparty_form());
    body.push_str(&render_tier_form());
    body.push_str(&render_review_form());
    let _ = write!(
        body,
        "<div class=\"wizard-nav\"><button type=\"button\" class=\"btn\" data-wizard=\"back\">Back</button><button type=\"button\" class=\"btn btn-primary\" data-wizard=\"next\">Next</button></div><noscript><p>The intake form needs JavaScript. You can also email your case to <a href=\"mailto:{email}\">{email}</a>.</p></noscript></section><script type=\"application/json\" id=\"intake-labels\">{labels}</script><script src=\"/assets/intake.js\" defer></script>",
        email = CASE_EMAIL,
        labels = script_json(&labels),
    );
    render_page(ctx, &meta, &body)
}

pub fn thank_you_page(ctx: &PageContext, query: &ThankYouQuery) -> String {
    let meta = PageMeta::new("Thank You", "Your case has been received.").noindex();

    let case_id = query.case_id.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let Some(case_id) = case_id else {
        let body = "<section class=\"thank-you\"><h1>Invalid Case ID</h1><p>No case ID was provided. Please submit a case first.</p><a class=\"btn btn-primary\" href=\"/start-investigation\">Start Investigation</a></section>";
        return render_page(ctx, &meta, body);
    };

    let body = format!(
        r#"<section class="thank-you">
<h1>We've received your case</h1>
<p>Your case ID is <strong class="case-id">{id}</strong></p>
<p class="hint">Keep this case ID for your records. Reference this ID in all communications about your case.</p>
<p>A specialist will contact you shortly to confirm details and timeline.</p>
<h2>What happens next?</h2>
<ul class="next-steps">
<li><h3>Response Time</h3><p>Typical response time varies by tier: Technical Analysis (2-4h), Tactical Probe (1-2 days), Strategic Due Diligence (1-2 weeks)</p></li>
<li><h3>Email Whitelist</h3><p>Please whitelist {email} to ensure you receive all case updates and communications</p></li>
<li><h3>Additional Evidence</h3><p>You can securely add more evidence or documentation to your case at any time using the link below</p></li>
</ul>
<a class="btn btn-primary" href="/contact?case={id_param}&amp;topic=evidence">Add evidence</a> <a class="btn" href="/">Back to Home</a>
</section>"#,
        id = escape_html(case_id),
        id_param = urlencoding::encode(case_id),
        email = CASE_EMAIL,
    );
    render_page(ctx, &meta, &body)
}
