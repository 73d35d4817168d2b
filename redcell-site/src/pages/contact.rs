use serde::Deserialize;
use std::fmt::Write;

use super::layout::{PageContext, PageMeta, escape_html, render_page};
use crate::content::site::{CASE_EMAIL, CONTACT_EMAIL};
use crate::maps::MapsConfig;

const OFFICE_ADDRESS: [&str; 4] = [
    "30th Floor, Bhiraj Tower at EmQuartier",
    "Sukhumvit Road, Khlong Tan Nuea",
    "Watthana, Bangkok 10110",
    "Thailand",
];

const OFFICE_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 6:00 PM (ICT)",
    "Saturday: 10:00 AM - 2:00 PM (ICT)",
    "Sunday: Closed",
];

/// Links from other pages can pre-fill the topic or reference a case
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactQuery {
    pub topic: Option<String>,
    #[serde(rename = "case")]
    pub case_id: Option<String>,
}

fn render_map(maps: &MapsConfig) -> String {
    if maps.has_api_key {
        format!(
            "<iframe class=\"office-map\" title=\"Office location\" loading=\"lazy\" referrerpolicy=\"no-referrer-when-downgrade\" src=\"https://www.google.com/maps/embed/v1/place?key={}&amp;q={}\"></iframe>",
            urlencoding::encode(&maps.api_key),
            urlencoding::encode(&OFFICE_ADDRESS.join(", "))
        )
    } else {
        "<div class=\"office-map map-unavailable\"><p>Map unavailable</p></div>".to_string()
    }
}

pub fn contact_page(ctx: &PageContext, maps: &MapsConfig, query: &ContactQuery) -> String {
    let meta = PageMeta::new(
        "Contact",
        "Questions about our services, press inquiries or sensitive matters. We're here to help.",
    );

    let subject = match (&query.case_id, &query.topic) {
        (Some(case_id), _) => format!("Case {}", case_id),
        (None, Some(topic)) => topic.clone(),
        (None, None) => String::new(),
    };

    let mut body = String::from(
        "<section class=\"page-hero\"><h1>Contact Us</h1><p>Whether you have a question about our services, a press inquiry, or need to discuss a sensitive matter, we're here to help.</p><span class=\"badge\">24/7 Support Available</span></section><section class=\"contact-grid\"><div class=\"contact-info\">",
    );
    let _ = write!(
        body,
        "<p>Use the contact details below for specific inquiries. For case submissions, please use our secure portal.</p><p><a href=\"mailto:{email}\">{email}</a></p><p>To submit a new case with encrypted file uploads, please use our dedicated portal. <a href=\"/submit\" data-cta=\"intake_portal\">Open intake portal</a> or write to <a href=\"mailto:{case_email}\">{case_email}</a>.</p><address>",
        email = CONTACT_EMAIL,
        case_email = CASE_EMAIL
    );
    body.push_str(&OFFICE_ADDRESS.join("<br>"));
    body.push_str("</address><ul class=\"hours\">");
    for line in OFFICE_HOURS {
        let _ = write!(body, "<li>{}</li>", line);
    }
    body.push_str("</ul>");
    body.push_str(&render_map(maps));
    body.push_str("</div>");

    let _ = write!(
        body,
        r#"<form class="contact-form" id="contact-form" novalidate>
<label for="name">Full Name</label><input id="name" name="name" required autocomplete="name">
<label for="email">Email Address</label><input id="email" name="email" type="email" required autocomplete="email">
<label for="company">Company</label><input id="company" name="company" autocomplete="organization">
<label for="subject">Subject</label><input id="subject" name="subject" placeholder="Inquiry about Tactical Probes" value="{subject}">
<label for="message">Your Message</label><textarea id="message" name="message" rows="6" required></textarea>
<input type="hidden" name="case" value="{case_id}">
<p class="form-status" role="status" aria-live="polite"></p>
<button type="submit" class="btn btn-primary">Send Message</button>
</form>
<script>
(function () {{
  var form = document.getElementById("contact-form");
  var status = form.querySelector(".form-status");
  form.addEventListener("submit", function (event) {{
    event.preventDefault();
    var button = form.querySelector("button");
    button.disabled = true;
    button.textContent = "Sending...";
    var payload = {{}};
    new FormData(form).forEach(function (value, key) {{ payload[key] = value; }});
    if (!payload["case"]) delete payload["case"];
    fetch("/api/contact", {{
      method: "POST",
      headers: {{ "Content-Type": "application/json" }},
      body: JSON.stringify(payload)
    }}).then(function (res) {{ return res.json(); }}).then(function (data) {{
      if (data.ok) {{
        form.reset();
        status.textContent = "Thank you for your message. We'll get back to you soon.";
      }} else {{
        status.textContent = Object.values(data.fields || {{}}).join(" ") || "Failed to send message. Please try again.";
      }}
    }}).catch(function () {{
      status.textContent = "Failed to send message. Please try again.";
    }}).finally(function () {{
      button.disabled = false;
      button.textContent = "Send Message";
    }});
  }});
}})();
</script></section>"#,
        subject = escape_html(&subject),
        case_id = escape_html(query.case_id.as_deref().unwrap_or("")),
    );
    render_page(ctx, &meta, &body)
}
