//! Cookie consent state.
//!
//! The browser keeps two entries: a marker saying a choice was made, and the chosen
//! preference flags as JSON. The server reads them from the `Cookie` header to decide
//! whether the banner is rendered and whether analytics may run.

use axum::http::{HeaderMap, HeaderValue, header};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

pub const COOKIE_CONSENT_KEY: &str = "redcell-cookie-consent";
pub const COOKIE_PREFERENCES_KEY: &str = "redcell-cookie-preferences";

const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub essential: bool,
    pub performance: bool,
    pub functional: bool,
    pub marketing: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self {
            essential: true,
            performance: false,
            functional: false,
            marketing: false,
        }
    }
}

impl CookiePreferences {
    pub fn all() -> Self {
        Self {
            essential: true,
            performance: true,
            functional: true,
            marketing: true,
        }
    }

    pub fn allows(&self, category: CookieCategory) -> bool {
        match category {
            CookieCategory::Essential => self.essential,
            CookieCategory::Performance => self.performance,
            CookieCategory::Functional => self.functional,
            CookieCategory::Marketing => self.marketing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieCategory {
    Essential,
    Performance,
    Functional,
    Marketing,
}

/// Key/value storage for consent, shaped after browser local storage
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    items: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Reads consent from a request's cookies and collects `Set-Cookie` values for the response.
#[derive(Debug, Default, Clone)]
pub struct CookieHeaderStore {
    cookies: HashMap<String, String>,
    pending: Vec<String>,
}

impl CookieHeaderStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = HashMap::new();
        for value in headers.get_all(header::COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            for pair in raw.split(';') {
                if let Some((name, value)) = pair.trim().split_once('=') {
                    let decoded = urlencoding::decode(value.trim())
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| value.trim().to_string());
                    cookies.insert(name.trim().to_string(), decoded);
                }
            }
        }
        Self {
            cookies,
            pending: Vec::new(),
        }
    }

    /// `Set-Cookie` header values for every item written through this store
    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        self.pending
            .iter()
            .filter_map(|cookie| HeaderValue::from_str(cookie).ok())
            .collect()
    }
}

impl PreferenceStore for CookieHeaderStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.cookies.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.pending.push(format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            key,
            urlencoding::encode(&value),
            COOKIE_MAX_AGE_SECS
        ));
        self.cookies.insert(key.to_string(), value);
    }

    /// Expires the cookie in the browser
    fn remove_item(&mut self, key: &str) {
        self.pending
            .push(format!("{}=; Path=/; Max-Age=0; SameSite=Lax", key));
        self.cookies.remove(key);
    }
}

/// Consent banner state over some preference store
pub struct CookieConsent<S: PreferenceStore> {
    store: S,
    preferences: CookiePreferences,
    banner_visible: bool,
}

impl<S: PreferenceStore> CookieConsent<S> {
    /// Banner is visible until a choice has been recorded. Unreadable saved
    /// preferences fall back to essential-only.
    pub fn load(store: S) -> Self {
        let has_consent = store.get_item(COOKIE_CONSENT_KEY).is_some();
        let preferences = if has_consent {
            store
                .get_item(COOKIE_PREFERENCES_KEY)
                .and_then(|saved| serde_json::from_str(&saved).ok())
                .unwrap_or_default()
        } else {
            CookiePreferences::default()
        };
        Self {
            store,
            preferences,
            banner_visible: !has_consent,
        }
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    pub fn preferences(&self) -> CookiePreferences {
        self.preferences
    }

    pub fn accept_all(&mut self) {
        self.save(CookiePreferences::all());
    }

    pub fn accept_essential_only(&mut self) {
        self.save(CookiePreferences::default());
    }

    pub fn save_custom(&mut self, preferences: CookiePreferences) {
        self.save(preferences);
    }

    /// Toggles a category before saving. Essential cookies cannot be switched off.
    pub fn update_preference(&mut self, category: CookieCategory, value: bool) {
        match category {
            CookieCategory::Essential => {}
            CookieCategory::Performance => self.preferences.performance = value,
            CookieCategory::Functional => self.preferences.functional = value,
            CookieCategory::Marketing => self.preferences.marketing = value,
        }
    }

    /// Saves the preferences as currently toggled
    pub fn save_current(&mut self) {
        self.save(self.preferences);
    }

    /// Forgets the stored choice so the banner asks again.
    pub fn reset(&mut self) {
        self.store.remove_item(COOKIE_CONSENT_KEY);
        self.store.remove_item(COOKIE_PREFERENCES_KEY);
        self.preferences = CookiePreferences::default();
        self.banner_visible = true;
        info!("cookie consent withdrawn");
    }

    pub fn dismiss(&mut self) {
        self.banner_visible = false;
    }

    pub fn can_use_analytics(&self) -> bool {
        self.has_consent_for(CookieCategory::Performance)
    }

    pub fn can_use_marketing(&self) -> bool {
        self.has_consent_for(CookieCategory::Marketing)
    }

    pub fn can_use_functional(&self) -> bool {
        self.has_consent_for(CookieCategory::Functional)
    }

    /// Nothing is allowed before a choice has been stored.
    fn has_consent_for(&self, category: CookieCategory) -> bool {
        self.store.get_item(COOKIE_CONSENT_KEY).is_some() && self.preferences.allows(category)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn save(&mut self, mut preferences: CookiePreferences) {
        preferences.essential = true;
        self.store.set_item(COOKIE_CONSENT_KEY, "true".to_string());
        match serde_json::to_string(&preferences) {
            Ok(json) => self.store.set_item(COOKIE_PREFERENCES_KEY, json),
            Err(e) => tracing::warn!(error = %e, "could not serialize cookie preferences"),
        }
        self.preferences = preferences;
        self.banner_visible = false;

        if preferences.performance {
            info!("performance cookies accepted, analytics can be initialized");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_shows_until_a_choice_is_made() {
        let consent = CookieConsent::load(MemoryPreferenceStore::new());
        assert!(consent.banner_visible());
        assert!(!consent.can_use_analytics());
    }

    #[test]
    fn accept_all_persists_every_flag_and_hides_banner_on_reload() {
        let mut consent = CookieConsent::load(MemoryPreferenceStore::new());
        consent.accept_all();
        let store = consent.into_store();

        let reloaded = CookieConsent::load(store);
        assert!(!reloaded.banner_visible());
        assert_eq!(reloaded.preferences(), CookiePreferences::all());
        assert!(reloaded.can_use_analytics());
        assert!(reloaded.can_use_marketing());
        assert!(reloaded.can_use_functional());
    }

    #[test]
    fn essential_cannot_be_disabled() {
        let mut consent = CookieConsent::load(MemoryPreferenceStore::new());
        consent.update_preference(CookieCategory::Essential, false);
        consent.update_preference(CookieCategory::Marketing, true);
        consent.save_current();
        assert!(consent.preferences().essential);
        assert!(consent.can_use_marketing());
        assert!(!consent.can_use_analytics());

        consent.save_custom(CookiePreferences {
            essential: false,
            ..CookiePreferences::default()
        });
        assert!(consent.preferences().essential);
    }

    #[test]
    fn cookie_store_round_trips_through_headers() {
        let mut consent = CookieConsent::load(CookieHeaderStore::default());
        consent.accept_essential_only();
        let store = consent.into_store();
        let set_cookies = store.set_cookie_headers();
        assert_eq!(set_cookies.len(), 2);

        let cookie_line = set_cookies
            .iter()
            .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_string())
            .collect::<Vec<_>>()
            .join("; ");
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(&cookie_line).unwrap());

        let reloaded = CookieConsent::load(CookieHeaderStore::from_headers(&headers));
        assert!(!reloaded.banner_visible());
        assert_eq!(reloaded.preferences(), CookiePreferences::default());
    }

    #[test]
    fn reset_withdraws_consent_and_expires_cookies() {
        let mut consent = CookieConsent::load(MemoryPreferenceStore::new());
        consent.accept_all();
        consent.reset();
        assert!(consent.banner_visible());
        assert!(!consent.can_use_analytics());
        assert_eq!(consent.preferences(), CookiePreferences::default());

        let reloaded = CookieConsent::load(consent.into_store());
        assert!(reloaded.banner_visible());

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("redcell-cookie-consent=true"),
        );
        let mut consent = CookieConsent::load(CookieHeaderStore::from_headers(&headers));
        assert!(!consent.banner_visible());
        consent.reset();
        let expired: Vec<String> = consent
            .into_store()
            .set_cookie_headers()
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(expired.len(), 2);
        assert!(expired.iter().all(|c| c.contains("Max-Age=0")));
        assert!(expired[0].starts_with("redcell-cookie-consent=;"));
    }

    #[test]
    fn corrupt_preferences_fall_back_to_essential() {
        let mut store = MemoryPreferenceStore::new();
        store.set_item(COOKIE_CONSENT_KEY, "true".to_string());
        store.set_item(COOKIE_PREFERENCES_KEY, "{not json".to_string());
        let consent = CookieConsent::load(store);
        assert!(!consent.banner_visible());
        assert_eq!(consent.preferences(), CookiePreferences::default());
    }
}
