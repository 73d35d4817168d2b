//! Field rules for the intake wizard and the smaller site forms.
//!
//! Every validator collects all failing fields instead of stopping at the first one, so a
//! step can highlight everything that needs fixing at once.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::models::{
    BasicsFormData, ContactRequest, CounterpartyFormData, IntakeFormData, QuickStartRequest,
    ReviewFormData, TierFormData,
};

pub const MIN_SUMMARY_WORDS: usize = 10;
pub const MAX_SUMMARY_WORDS: usize = 600;
pub const MIN_SUMMARY_CHARS: usize = 10;
pub const MAX_SUMMARY_CHARS: usize = 3000;
pub const MIN_GEOGRAPHY_CHARS: usize = 2;
pub const MAX_GEOGRAPHY_CHARS: usize = 100;
pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_FILES: usize = 10;
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;
pub const ALLOWED_FILE_TYPES: [&str; 4] =
    ["application/pdf", "image/png", "image/jpeg", "image/jpg"];

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+(?:[/?#]\S*)?|(?:mailto|tel):\S+)$")
        .expect("static URL pattern")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("static email pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// All field errors found while validating one form or section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        let error = FieldError {
            path: path.into(),
            message: message.into(),
        };
        if !self.errors.contains(&error) {
            self.errors.push(error);
        }
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        for error in other.errors {
            self.add(error.path, error.message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }

    /// First message per field, for inline display.
    pub fn to_field_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for error in &self.errors {
            map.entry(error.path.clone())
                .or_insert_with(|| error.message.clone());
        }
        map
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn is_valid_url(value: &str) -> bool {
    URL_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_basics(basics: &BasicsFormData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if basics.scenario.is_none() {
        errors.add("basics.scenario", "Please select a scenario");
    }

    let geography = basics.geography.chars().count();
    if geography < MIN_GEOGRAPHY_CHARS {
        errors.add("basics.geography", "Geography must be at least 2 characters");
    } else if geography > MAX_GEOGRAPHY_CHARS {
        errors.add("basics.geography", "Geography too long");
    }

    if basics.amount_at_risk.is_empty() {
        errors.add("basics.amountAtRisk", "Amount at risk is required");
    }

    if basics.urgency.is_none() {
        errors.add("basics.urgency", "Please select urgency level");
    }

    let summary_chars = basics.case_summary.chars().count();
    let summary_words = count_words(&basics.case_summary);
    if summary_chars < MIN_SUMMARY_CHARS || summary_words < MIN_SUMMARY_WORDS {
        errors.add("basics.caseSummary", "Case summary must be at least 10 words");
    }
    if summary_chars > MAX_SUMMARY_CHARS {
        errors.add(
            "basics.caseSummary",
            "Case summary must be under 3000 characters",
        );
    }
    if summary_words > MAX_SUMMARY_WORDS {
        errors.add("basics.caseSummary", "Case summary must be under 600 words");
    }

    errors.into_result()
}

pub fn validate_counterparty(counterparty: &CounterpartyFormData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if counterparty.entity_type.is_none() {
        errors.add("counterparty.entityType", "Please select entity type");
    }

    let name = counterparty.name_or_handle.chars().count();
    if name == 0 {
        errors.add(
            "counterparty.nameOrHandle",
            "Name/Organization/Handle is required",
        );
    } else if name > MAX_NAME_CHARS {
        errors.add("counterparty.nameOrHandle", "Name too long");
    }

    if let Some(website) = counterparty.website.as_deref() {
        if !website.is_empty() && !is_valid_url(website) {
            errors.add("counterparty.website", "Invalid URL format");
        }
    }

    let files = &counterparty.files;
    if files.len() > MAX_FILES {
        errors.add("counterparty.files", "Maximum 10 files allowed");
    }
    if files.iter().any(|file| file.size > MAX_FILE_SIZE) {
        errors.add("counterparty.files", "Each file must be under 20MB");
    }
    if files
        .iter()
        .any(|file| !ALLOWED_FILE_TYPES.contains(&file.mime_type.as_str()))
    {
        errors.add(
            "counterparty.files",
            "Only PDF, PNG, and JPG files are allowed",
        );
    }

    errors.into_result()
}

pub fn validate_tier(tier: &TierFormData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if tier.selected_tier.is_none() {
        errors.add("tier.selectedTier", "Please select an intelligence tier");
    }
    errors.into_result()
}

pub fn validate_review(review: &ReviewFormData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if !review.confirm_accuracy {
        errors.add(
            "review.confirmAccuracy",
            "You must confirm the information is accurate",
        );
    }
    errors.into_result()
}

/// Validates every section; the error lists failures across all of them.
pub fn validate_intake(data: &IntakeFormData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for result in [
        validate_basics(&data.basics),
        validate_counterparty(&data.counterparty),
        validate_tier(&data.tier),
        validate_review(&data.review),
    ] {
        if let Err(e) = result {
            errors.extend(e);
        }
    }
    errors.into_result()
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(email.trim()) {
        errors.add("email", "Please enter a valid email address");
    }
}

pub fn validate_quick_start(request: &QuickStartRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if request.full_name.trim().is_empty() {
        errors.add("fullName", "Full name is required");
    }
    check_email(&mut errors, &request.email);
    errors.into_result()
}

pub fn validate_contact(request: &ContactRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if request.name.trim().is_empty() {
        errors.add("name", "Name is required");
    }
    check_email(&mut errors, &request.email);
    if request.message.trim().is_empty() {
        errors.add("message", "Message is required");
    }
    errors.into_result()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::*;

    pub fn summary(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    pub fn file(name: &str, size: u64, mime_type: &str) -> FileDescriptor {
        FileDescriptor {
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
            last_modified: 1_700_000_000_000,
        }
    }

    pub fn valid_intake() -> IntakeFormData {
        IntakeFormData {
            basics: BasicsFormData {
                scenario: Some(Scenario::PrePayment),
                geography: "Thailand".to_string(),
                amount_at_risk: "USD 250,000".to_string(),
                urgency: Some(Urgency::Within24h),
                case_summary: summary(25),
            },
            counterparty: CounterpartyFormData {
                entity_type: Some(EntityType::Company),
                name_or_handle: "Global Exports Ltd.".to_string(),
                website: Some("https://global-exports.example".to_string()),
                contacted_before: true,
                files: vec![file("invoice.pdf", 1024, "application/pdf")],
            },
            tier: TierFormData {
                selected_tier: Some(TierKey::Tactical),
            },
            review: ReviewFormData {
                confirm_accuracy: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn quick_start_needs_name_and_email() {
        let err = validate_quick_start(&QuickStartRequest::default()).unwrap_err();
        assert_eq!(err.to_field_map()["fullName"], "Full name is required");
        assert_eq!(err.to_field_map()["email"], "Email is required");

        let request = QuickStartRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@".to_string(),
            ..Default::default()
        };
        let err = validate_quick_start(&request).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.to_field_map()["email"], "Please enter a valid email address");
    }

    #[test]
    fn contact_requires_message() {
        let request = ContactRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            ..Default::default()
        };
        let err = validate_contact(&request).unwrap_err();
        assert!(err.has_path("message"));
        assert!(!err.has_path("email"));
    }

    #[test]
    fn valid_intake_passes() {
        assert!(validate_intake(&valid_intake()).is_ok());
    }

    #[test]
    fn summary_word_bounds() {
        let mut data = valid_intake();
        data.basics.case_summary = summary(9);
        let err = validate_basics(&data.basics).unwrap_err();
        assert_eq!(
            err.to_field_map()["basics.caseSummary"],
            "Case summary must be at least 10 words"
        );

        data.basics.case_summary = summary(10);
        assert!(validate_basics(&data.basics).is_ok());

        data.basics.case_summary = summary(600);
        assert!(validate_basics(&data.basics).is_ok());

        data.basics.case_summary = "a ".repeat(601);
        let err = validate_basics(&data.basics).unwrap_err();
        assert!(err.errors().iter().any(|e| e.message == "Case summary must be under 600 words"));
    }

    #[test]
    fn long_words_hit_character_cap() {
        let mut data = valid_intake();
        data.basics.case_summary = vec!["x".repeat(400); 10].join(" ");
        let err = validate_basics(&data.basics).unwrap_err();
        assert_eq!(
            err.to_field_map()["basics.caseSummary"],
            "Case summary must be under 3000 characters"
        );
    }

    #[test]
    fn missing_choices_are_reported_together() {
        let err = validate_basics(&BasicsFormData::default()).unwrap_err();
        for path in [
            "basics.scenario",
            "basics.geography",
            "basics.amountAtRisk",
            "basics.urgency",
            "basics.caseSummary",
        ] {
            assert!(err.has_path(path), "missing {}", path);
        }
    }

    #[test]
    fn file_rules() {
        let mut data = valid_intake();
        data.counterparty.files = (0..11)
            .map(|i| file(&format!("{}.png", i), 10, "image/png"))
            .collect();
        assert!(validate_counterparty(&data.counterparty).is_err());

        data.counterparty.files = vec![file("big.pdf", MAX_FILE_SIZE + 1, "application/pdf")];
        assert!(validate_counterparty(&data.counterparty).is_err());

        data.counterparty.files = vec![file("exact.pdf", MAX_FILE_SIZE, "application/pdf")];
        assert!(validate_counterparty(&data.counterparty).is_ok());

        data.counterparty.files = vec![file("notes.docx", 10, "application/msword")];
        let err = validate_counterparty(&data.counterparty).unwrap_err();
        assert_eq!(
            err.to_field_map()["counterparty.files"],
            "Only PDF, PNG, and JPG files are allowed"
        );

        data.counterparty.files = vec![file("scan.jpg", 10, "image/jpg")];
        assert!(validate_counterparty(&data.counterparty).is_ok());
    }

    #[test]
    fn website_is_optional_but_must_parse() {
        let mut data = valid_intake();
        data.counterparty.website = Some(String::new());
        assert!(validate_counterparty(&data.counterparty).is_ok());
        data.counterparty.website = None;
        assert!(validate_counterparty(&data.counterparty).is_ok());
        data.counterparty.website = Some("global-exports".to_string());
        assert!(validate_counterparty(&data.counterparty).is_err());
    }

    #[test]
    fn unconfirmed_review_rejects_whole_intake() {
        let mut data = valid_intake();
        data.review.confirm_accuracy = false;
        let err = validate_intake(&data).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].path, "review.confirmAccuracy");
    }

    #[test]
    fn url_and_email_checks() {
        assert!(is_valid_url("https://example.com/path?q=1"));
        assert!(is_valid_url("http://localhost:8080"));
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("example.com"));
        assert!(is_valid_email("analyst@redcell.example"));
        assert!(!is_valid_email("analyst@localhost"));
        assert!(!is_valid_email("not an email"));
    }

    #[test]
    fn display_flattens_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("tier.selectedTier", "Please select an intelligence tier");
        errors.add("tier.selectedTier", "Please select an intelligence tier");
        assert_eq!(
            errors.to_string(),
            "tier.selectedTier: Please select an intelligence tier"
        );
    }
}
