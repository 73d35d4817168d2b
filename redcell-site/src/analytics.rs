use serde_json::{Map, Value, json};
use tracing::info;

use crate::consent::{CookieConsent, PreferenceStore};

/// Outcome of a tracking call, mostly useful for tests and API replies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    Recorded,
    /// Performance cookies were not accepted
    NoConsent,
}

/// Records a CTA event as a structured log line when performance cookies are allowed.
pub fn track_event<S: PreferenceStore>(
    consent: &CookieConsent<S>,
    event_name: &str,
    properties: Map<String, Value>,
) -> TrackOutcome {
    if !consent.can_use_analytics() {
        return TrackOutcome::NoConsent;
    }

    let mut payload = Map::new();
    payload.insert("event_category".to_string(), json!("CTA"));
    payload.insert("event_label".to_string(), json!(event_name));
    payload.extend(properties);
    let payload = Value::Object(payload);

    info!(
        target: "redcell_site::analytics",
        event = %event_name,
        properties = %payload,
        "event tracked"
    );
    TrackOutcome::Recorded
}

pub fn track_cta_click<S: PreferenceStore>(
    consent: &CookieConsent<S>,
    cta_name: &str,
    page_location: &str,
) -> TrackOutcome {
    let mut properties = Map::new();
    properties.insert("cta_name".to_string(), json!(cta_name));
    properties.insert("page_location".to_string(), json!(page_location));
    track_event(consent, "cta_click", properties)
}

pub fn track_run_check<S: PreferenceStore>(consent: &CookieConsent<S>, page: &str) -> TrackOutcome {
    track_cta_click(consent, "run_check", page)
}

pub fn track_talk_to_sales<S: PreferenceStore>(
    consent: &CookieConsent<S>,
    page: &str,
) -> TrackOutcome {
    track_cta_click(consent, "talk_to_sales", page)
}

pub fn track_intake_portal<S: PreferenceStore>(
    consent: &CookieConsent<S>,
    page: &str,
) -> TrackOutcome {
    track_cta_click(consent, "intake_portal", page)
}

pub fn track_procurement_download<S: PreferenceStore>(
    consent: &CookieConsent<S>,
    page: &str,
) -> TrackOutcome {
    track_cta_click(consent, "procurement_pack_download", page)
}

/// Dispatches a named CTA from the client to its helper. Unknown names are tracked as-is.
pub fn track_named<S: PreferenceStore>(
    consent: &CookieConsent<S>,
    name: &str,
    properties: Map<String, Value>,
) -> TrackOutcome {
    let page = properties
        .get("page_location")
        .and_then(Value::as_str)
        .unwrap_or("/")
        .to_string();
    match name {
        "run_check" => track_run_check(consent, &page),
        "talk_to_sales" => track_talk_to_sales(consent, &page),
        "intake_portal" => track_intake_portal(consent, &page),
        "procurement_pack_download" => track_procurement_download(consent, &page),
        _ => track_event(consent, name, properties),
    }
}

pub fn initialize_analytics<S: PreferenceStore>(consent: &CookieConsent<S>) -> bool {
    let allowed = consent.can_use_analytics();
    if allowed {
        info!("analytics initialized with user consent");
    }
    allowed
}

pub fn initialize_marketing<S: PreferenceStore>(consent: &CookieConsent<S>) -> bool {
    let allowed = consent.can_use_marketing();
    if allowed {
        info!("marketing tools initialized with user consent");
    }
    allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::{CookieCategory, MemoryPreferenceStore};

    #[test]
    fn events_need_performance_consent() {
        let mut consent = CookieConsent::load(MemoryPreferenceStore::new());
        assert_eq!(
            track_run_check(&consent, "/pricing"),
            TrackOutcome::NoConsent
        );

        consent.update_preference(CookieCategory::Performance, true);
        consent.save_current();
        assert_eq!(track_run_check(&consent, "/pricing"), TrackOutcome::Recorded);
        assert!(initialize_analytics(&consent));
        assert!(!initialize_marketing(&consent));
    }

    #[test]
    fn named_dispatch_falls_back_to_raw_event() {
        let mut consent = CookieConsent::load(MemoryPreferenceStore::new());
        consent.accept_all();
        assert_eq!(
            track_named(&consent, "newsletter_signup", Map::new()),
            TrackOutcome::Recorded
        );
    }
}
