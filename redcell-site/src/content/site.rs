pub const SITE_NAME: &str = "RedCellAdvisory | Cross-Border Fraud Intelligence";
pub const SHORT_NAME: &str = "RedCellAdvisory";
pub const SITE_DESCRIPTION: &str = "Paid AI + human intelligence reports for import/export pre-payments. We hunt cross-border fraud before it hits your balance sheet.";
pub const CONTACT_EMAIL: &str = "info@redcelladvisory.com";
pub const CASE_EMAIL: &str = "hello@redcell-advisory.com";
pub const LEGAL_ENTITY: &str = "Burakorn Partners Co., Ltd.";

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/services", label: "Services" },
    NavLink { href: "/pricing", label: "Pricing" },
    NavLink { href: "/cases", label: "Case Studies" },
    NavLink { href: "/blog", label: "Blog" },
    NavLink { href: "/faq", label: "FAQ" },
    NavLink { href: "/contact", label: "Contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { href: "/services", label: "Services" },
    NavLink { href: "/pricing", label: "Pricing" },
    NavLink { href: "/blog", label: "Blog" },
];

pub const FOOTER_LEGAL_LINKS: &[NavLink] = &[
    NavLink { href: "/legal/terms", label: "Terms of Service" },
    NavLink { href: "/legal/privacy", label: "Privacy Policy" },
    NavLink { href: "/legal/dpa-gdpr", label: "Data Processing & GDPR" },
    NavLink { href: "/legal/aup", label: "Acceptable Use Policy" },
    NavLink { href: "/legal/anti-bribery", label: "Anti-Bribery Policy" },
    NavLink { href: "/legal/sanctions-aml", label: "Sanctions & AML" },
    NavLink { href: "/legal/cookies", label: "Cookie Policy" },
    NavLink { href: "/legal/accessibility", label: "Accessibility" },
    NavLink { href: "/legal", label: "Legal" },
];

pub const TRUST_BADGES: &[&str] = &["OSINT Framework", "Stripe Partner", "GDPR Compliant"];

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOW_IT_WORKS: &[ProcessStep] = &[
    ProcessStep {
        title: "Upload & Retain",
        description: "Submit your case documents and pay the initial retainer securely.",
    },
    ProcessStep {
        title: "AI Deep-Scan",
        description: "Our system scans global registries, sanctions lists, and digital footprints.",
    },
    ProcessStep {
        title: "Human Analyst Validation",
        description: "Ex-intelligence operators verify AI findings and add context.",
    },
    ProcessStep {
        title: "Receive Your Brief",
        description: "Get a PDF report and actionable playbook in ≤ 5 business days.",
    },
];

pub const USE_CASES: &[&str] = &[
    "Pre-payment counterparty vetting",
    "Post-payment red-flag review",
    "Funds frozen by banks / OFAC",
    "Crypto-exchange asset lock",
    "Supplier due diligence",
    "Cross-border asset recovery",
];
