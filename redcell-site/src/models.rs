use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    PrePayment,
    PostPayment,
    FrozenFunds,
    Other,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::PrePayment,
        Scenario::PostPayment,
        Scenario::FrozenFunds,
        Scenario::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::PrePayment => "pre-payment",
            Scenario::PostPayment => "post-payment",
            Scenario::FrozenFunds => "frozen-funds",
            Scenario::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::PrePayment => "Pre-payment vetting",
            Scenario::PostPayment => "Post-payment review",
            Scenario::FrozenFunds => "Frozen funds & OFAC",
            Scenario::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "24h")]
    Within24h,
    #[serde(rename = "1-2-days")]
    OneToTwoDays,
    #[serde(rename = "2-plus-days")]
    TwoPlusDays,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [
        Urgency::Within24h,
        Urgency::OneToTwoDays,
        Urgency::TwoPlusDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Within24h => "24h",
            Urgency::OneToTwoDays => "1-2-days",
            Urgency::TwoPlusDays => "2-plus-days",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Within24h => "Within 24 hours",
            Urgency::OneToTwoDays => "1–2 business days",
            Urgency::TwoPlusDays => "More than 2 business days",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Company,
    Individual,
    Unknown,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [EntityType::Company, EntityType::Individual, EntityType::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Company => "company",
            EntityType::Individual => "individual",
            EntityType::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Company => "Company",
            EntityType::Individual => "Individual",
            EntityType::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKey {
    Technical,
    Tactical,
    Strategic,
    Reclamation,
}

impl TierKey {
    pub const ALL: [TierKey; 4] = [
        TierKey::Technical,
        TierKey::Tactical,
        TierKey::Strategic,
        TierKey::Reclamation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TierKey::Technical => "Technical Analysis",
            TierKey::Tactical => "Tactical Probe",
            TierKey::Strategic => "Strategic Due Diligence",
            TierKey::Reclamation => "Reclamation Ops",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TierKey::Technical => "technical",
            TierKey::Tactical => "tactical",
            TierKey::Strategic => "strategic",
            TierKey::Reclamation => "reclamation",
        }
    }

    /// Maps the `plan` query value used by pricing links. Pricing calls the
    /// reclamation tier `recovery`.
    pub fn from_plan(plan: &str) -> Option<Self> {
        match plan {
            "technical" => Some(TierKey::Technical),
            "tactical" => Some(TierKey::Tactical),
            "strategic" => Some(TierKey::Strategic),
            "recovery" | "reclamation" => Some(TierKey::Reclamation),
            _ => None,
        }
    }
}

/// Metadata of an evidence file picked in the browser. The bytes never reach the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub last_modified: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicsFormData {
    pub scenario: Option<Scenario>,
    pub geography: String,
    pub amount_at_risk: String,
    pub urgency: Option<Urgency>,
    pub case_summary: String,
}

/// `contactedBefore` and `files` must always be sent; the rest surface as field errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartyFormData {
    #[serde(default)]
    pub entity_type: Option<EntityType>,
    #[serde(default)]
    pub name_or_handle: String,
    #[serde(default)]
    pub website: Option<String>,
    pub contacted_before: bool,
    pub files: Vec<FileDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TierFormData {
    pub selected_tier: Option<TierKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewFormData {
    pub confirm_accuracy: bool,
}

/// Everything the intake wizard collects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeFormData {
    pub basics: BasicsFormData,
    pub counterparty: CounterpartyFormData,
    pub tier: TierFormData,
    pub review: ReviewFormData,
}

/// Response of `POST /api/intake/submit`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub plan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StepSubmission {
    /// Answers for the session's current step, shaped like that step's section
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepInfo {
    pub id: String,
    pub title: String,
}

/// Client-facing snapshot of a wizard session
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub current_step: String,
    pub step_index: usize,
    pub steps: Vec<StepInfo>,
    pub progress: u8,
    pub completed_steps: Vec<String>,
    pub errors: BTreeMap<String, String>,
    pub message: Option<String>,
    pub data: IntakeFormData,
    pub case_id: Option<String>,
    pub completed: bool,
}

/// Short form on `/start-investigation`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickStartRequest {
    pub plan: Option<String>,
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub summary: String,
    pub docs: Vec<FileDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub topic: Option<String>,
    #[serde(rename = "case")]
    pub case_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentAction {
    AcceptAll,
    EssentialOnly,
    Custom,
    /// Withdraws the stored choice
    Reset,
}

#[derive(Debug, Deserialize)]
pub struct ConsentRequest {
    pub action: ConsentAction,
    pub preferences: Option<crate::consent::CookiePreferences>,
}

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub name: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
}
