use crate::models::TierKey;

pub const START_ROUTE: &str = "/start-investigation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Link,
}

#[derive(Debug, Clone)]
pub struct PricingTier {
    pub key: TierKey,
    /// Value of the `plan` query parameter on the start link
    pub plan: &'static str,
    pub is_popular: bool,
    pub price: &'static str,
    pub turnaround: &'static str,
    pub features: &'static [&'static str],
    /// Trusted HTML
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
    pub button_text: &'static str,
    pub button_variant: ButtonVariant,
}

impl PricingTier {
    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    pub fn button_link(&self) -> String {
        format!("{}?plan={}", START_ROUTE, self.plan)
    }
}

pub static PRICING_TIERS: [PricingTier; 4] = [
    PricingTier {
        key: TierKey::Technical,
        plan: "technical",
        is_popular: true,
        price: "USD 200",
        turnaround: "2–4 h",
        features: &[
            "AI-powered situational scan (Seraphim Core™)",
            "Deep-data sources beyond public internet",
            "Step-by-step action plan with costs & timelines",
        ],
        description: r#"Covers deals up to <span class="hl">$2 million</span> — premium risk check at <span class="hl">0.01% cost</span>."#,
        use_cases: &[
            "Pre-payment counterparty vetting",
            "Post-payment red-flag review",
            "Funds frozen by banks / OFAC",
            "Crypto-exchange asset lock",
        ],
        button_text: "Start Investigation Now",
        button_variant: ButtonVariant::Primary,
    },
    PricingTier {
        key: TierKey::Tactical,
        plan: "tactical",
        is_popular: false,
        price: "from USD 2,000",
        turnaround: "1-2 business days",
        features: &[
            "Director & shareholder mapping",
            "Adverse media + insider tips",
            "Network graph of connections",
        ],
        description: r#"Ideal for transactions <span class="hl">$0.5-10m</span>. <br/> <span class="accent">Typical ROI:</span> blocking a $250k loss."#,
        use_cases: &[],
        button_text: "Get this report",
        button_variant: ButtonVariant::Link,
    },
    PricingTier {
        key: TierKey::Strategic,
        plan: "strategic",
        is_popular: false,
        price: "from USD 10,000",
        turnaround: "1-2 weeks",
        features: &[
            "Full asset & liability trace",
            "On-ground human source inquiries",
            "Comprehensive risk memo for investors",
        ],
        description: r#"Recommended for deals <span class="hl">$10m+</span>, M&amp;A, JV or equity stakes."#,
        use_cases: &[],
        button_text: "Get this report",
        button_variant: ButtonVariant::Link,
    },
    PricingTier {
        key: TierKey::Reclamation,
        plan: "recovery",
        is_popular: false,
        price: "Custom Quote",
        turnaround: "custom",
        features: &[
            "Cross-jurisdictional asset seizure",
            "Liaison with law enforcement",
            "Ongoing recovery management",
        ],
        description: "3-phase roadmap, success-fee model after recovery. Suitable when fraud has already occurred and funds must be clawed back.",
        use_cases: &[],
        button_text: "Book Recovery Call",
        button_variant: ButtonVariant::Primary,
    },
];

pub fn tier(key: TierKey) -> &'static PricingTier {
    PRICING_TIERS
        .iter()
        .find(|t| t.key == key)
        .unwrap_or(&PRICING_TIERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_links_to_a_plan_the_wizard_understands() {
        for tier in PRICING_TIERS.iter() {
            assert_eq!(TierKey::from_plan(tier.plan), Some(tier.key));
            assert!(tier.button_link().starts_with("/start-investigation?plan="));
        }
        assert_eq!(tier(TierKey::Reclamation).name(), "Reclamation Ops");
        assert_eq!(PRICING_TIERS.iter().filter(|t| t.is_popular).count(), 1);
    }
}
