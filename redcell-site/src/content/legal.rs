//! Legal documents served under `/legal`.

#[derive(Debug, Clone, Copy)]
pub struct LegalSection {
    /// Anchor id used by the table of contents
    pub id: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct LegalDoc {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub last_updated: &'static str,
    pub sections: &'static [LegalSection],
}

impl LegalDoc {
    pub fn href(&self) -> String {
        format!("/legal/{}", self.slug)
    }
}

/// Documents highlighted on the `/legal` index
pub const FEATURED_DOCS: [&str; 3] = ["terms", "privacy", "dpa-gdpr"];

pub fn find_doc(slug: &str) -> Option<&'static LegalDoc> {
    LEGAL_DOCS.iter().find(|doc| doc.slug == slug)
}

pub fn featured_docs() -> impl Iterator<Item = &'static LegalDoc> {
    FEATURED_DOCS.iter().filter_map(|slug| find_doc(slug))
}

/// Label shown for one path segment in the breadcrumb trail
pub fn breadcrumb_label(segment: &str) -> String {
    match segment {
        "legal" => "Legal".to_string(),
        "terms" => "Terms of Service".to_string(),
        "privacy" => "Privacy Policy".to_string(),
        "dpa-gdpr" => "Data Processing & GDPR".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// `(href, label)` pairs for every segment of `path`
pub fn breadcrumbs(path: &str) -> Vec<(String, String)> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            (
                format!("/{}", segments[..=i].join("/")),
                breadcrumb_label(segment),
            )
        })
        .collect()
}

pub static LEGAL_DOCS: &[LegalDoc] = &[
    LegalDoc {
        slug: "terms",
        title: "Terms of Service",
        summary: "Terms governing your use of our cross-border fraud intelligence services.",
        last_updated: "December 15, 2024",
        sections: &[
            LegalSection {
                id: "who-we-are",
                title: "1. Who we are",
                paragraphs: &["These Terms of Service (\"Terms\") govern your access to and use of the website at redcells.vercel.app and the services provided by Burakorn Partners Co., Ltd. (\"we,\" \"us,\" or \"our\"). By using our site or engaging our services, you agree to these Terms."],
                items: &[],
            },
            LegalSection {
                id: "our-services",
                title: "2. Our services",
                paragraphs: &["We provide cross-border fraud intelligence, verification, and investigative briefings (the \"Services\"). The Services may include reports, memos, data checks, and advisory sessions. We do not provide legal advice, financial advice, or law-enforcement services."],
                items: &[],
            },
            LegalSection {
                id: "eligibility-accounts",
                title: "3. Eligibility & accounts",
                paragraphs: &["You represent that you are at least 18 and legally capable of entering a contract. If you create an account, you must keep your credentials confidential and promptly notify us of any unauthorized use."],
                items: &[],
            },
            LegalSection {
                id: "engagement-deliverables",
                title: "4. Engagement & deliverables",
                paragraphs: &["Unless otherwise agreed in writing, Services are delivered on a statement-of-work, tier, or per-brief basis. Delivery times are estimates. We may rely on third-party data sources; availability and accuracy can vary."],
                items: &[],
            },
            LegalSection {
                id: "fees-payment",
                title: "5. Fees & payment",
                paragraphs: &["Fees are communicated prior to engagement. Retainers and invoices are due as stated. Late payments may incur suspension of Services or interest permitted by law. You are responsible for taxes and charges except those based on our income."],
                items: &[],
            },
            LegalSection {
                id: "client-responsibilities",
                title: "6. Client responsibilities",
                paragraphs: &["You warrant that information you supply is accurate, lawful to share, and that you have authority to engage us. You must not use the Services to violate any law, harass individuals, or conduct discriminatory, invasive, or unlawful surveillance."],
                items: &[],
            },
            LegalSection {
                id: "confidentiality",
                title: "7. Confidentiality",
                paragraphs: &["Each party must keep the other's non-public information confidential and use it only to perform these Terms. This does not apply to information that is public, independently developed, or legally compelled to be disclosed (with notice where lawful)."],
                items: &[],
            },
            LegalSection {
                id: "intellectual-property",
                title: "8. Intellectual property",
                paragraphs: &["We retain all IP rights in our methods, templates, data processing, and deliverables. Upon full payment, we grant you a non-exclusive, non-transferable license to use deliverables internally for your legitimate business or case needs. You may not resell or publish deliverables without our written consent."],
                items: &[],
            },
            LegalSection {
                id: "acceptable-use",
                title: "9. Acceptable use & restrictions",
                paragraphs: &["You must not: (a) reverse-engineer our systems; (b) interfere with the site; (c) use the Services for automated scraping of personal data without a lawful basis; (d) use the Services to make decisions that produce legal or similarly significant effects about individuals without appropriate safeguards."],
                items: &[],
            },
            LegalSection {
                id: "third-party-content",
                title: "10. Third-party content",
                paragraphs: &["Reports may reference public or licensed datasets, sanctions lists, corporate registries, or OSINT sources. We are not responsible for third-party content or sites."],
                items: &[],
            },
            LegalSection {
                id: "disclaimers",
                title: "11. Disclaimers",
                paragraphs: &["The Services are provided \"as is\". We do not guarantee completeness or absolute accuracy of third-party data, nor outcomes of legal, financial, or operational decisions you take based on our work. We disclaim all warranties to the fullest extent permitted by law."],
                items: &[],
            },
            LegalSection {
                id: "limitation-liability",
                title: "12. Limitation of liability",
                paragraphs: &["To the extent permitted by law, our aggregate liability for claims arising out of or related to the Services is capped at the fees you paid for the Service giving rise to the claim in the 12 months preceding the event. We are not liable for indirect or consequential losses, loss of profits, or loss of data."],
                items: &[],
            },
            LegalSection {
                id: "indemnity",
                title: "13. Indemnity",
                paragraphs: &["You will indemnify and hold us harmless from claims arising from your misuse of the Services or breach of these Terms."],
                items: &[],
            },
            LegalSection {
                id: "term-termination",
                title: "14. Term & termination",
                paragraphs: &["Either party may terminate for convenience on written notice (fees for work performed remain payable) or for material breach if not cured within 14 days. Sections intended to survive (confidentiality, IP, payment, liability, governing law) do survive."],
                items: &[],
            },
            LegalSection {
                id: "compliance",
                title: "15. Compliance",
                paragraphs: &["You are responsible for ensuring your use complies with applicable laws, including anti-money-laundering (AML), sanctions, privacy, and data-protection laws."],
                items: &[],
            },
            LegalSection {
                id: "governing-law",
                title: "16. Governing law & disputes",
                paragraphs: &["These Terms are governed by Thailand law. Courts located in Thailand shall have exclusive jurisdiction, unless otherwise required by mandatory law."],
                items: &[],
            },
            LegalSection {
                id: "changes",
                title: "17. Changes to these Terms",
                paragraphs: &["We may update these Terms by posting a revised version with an updated date. Material changes will be reasonably notified."],
                items: &[],
            },
            LegalSection {
                id: "contact",
                title: "18. Contact",
                paragraphs: &["Burakorn Partners Co., Ltd. â€” Suite 3064, 30th Floor, Bhiraj Tower at EmQuartier, 689 Sukhumvit Rd, Khlong Tan Nuea, Watthana, Bangkok 10110 Email: info@redcelladvisory.com"],
                items: &[],
            },
        ],
    },
    LegalDoc {
        slug: "privacy",
        title: "Privacy Policy",
        summary: "How we collect, use, and protect your personal information.",
        last_updated: "December 15, 2024",
        sections: &[
            LegalSection {
                id: "controller-scope",
                title: "1. Controller & scope",
                paragraphs: &["Burakorn Partners Co., Ltd. controls personal data processed via redcells.vercel.app and in connection with our Services. This Policy explains what we collect, why, and how we handle it. If you are in the EEA/UK, this Policy also provides information required by GDPR."],
                items: &[],
            },
            LegalSection {
                id: "data-collection",
                title: "2. Personal data we collect",
                paragraphs: &["Information you provide: contact details, company role, case details you choose to submit, billing info.", "Automatically collected: device/browser info, IP address, analytics events, pages viewed, referrers.", "From third parties: sanctions/PEP lists, corporate registries, public OSINT sources, and vendors we use for hosting, analytics, or payments."],
                items: &[],
            },
            LegalSection {
                id: "purposes-legal-bases",
                title: "3. Purposes & legal bases (GDPR)",
                paragraphs: &["We process data to:"],
                items: &["Provide Services & respond to inquiries (Art. 6(1)(b) contract or pre-contract steps).", "Operate and secure our site (Art. 6(1)(f) legitimate interests in security and fraud prevention).", "Improve Services and analytics (Art. 6(1)(f) legitimate interests; we use privacy-respecting analytics where possible).", "Comply with law (Art. 6(1)(c)).", "Marketing with consent where required (Art. 6(1)(a)); you can withdraw any time."],
            },
            LegalSection {
                id: "cookies-analytics",
                title: "4. Cookies & analytics",
                paragraphs: &["We use essential cookies and privacy-respecting analytics (no cross-site tracking). Where non-essential cookies are used, we seek consent and provide controls."],
                items: &[],
            },
            LegalSection {
                id: "sharing-data",
                title: "5. Sharing your data",
                paragraphs: &["We share data with service providers (hosting, storage, analytics, payment, communications) under contracts requiring confidentiality and security. We may share data to comply with law or protect rights. We do not sell personal data."],
                items: &[],
            },
            LegalSection {
                id: "international-transfers",
                title: "6. International transfers",
                paragraphs: &["If data is transferred outside your country, we use appropriate safeguards (e.g., EU Standard Contractual Clauses) and assess partner protections."],
                items: &[],
            },
            LegalSection {
                id: "retention",
                title: "7. Retention",
                paragraphs: &["We keep data only as long as necessary for the purposes described, taking account of legal/contractual requirements and dispute-resolution needs."],
                items: &[],
            },
            LegalSection {
                id: "your-rights",
                title: "8. Your rights",
                paragraphs: &["Depending on your location, you may have rights to access, correct, delete, restrict, or object to processing; to data portability; and to withdraw consent. To exercise rights, contact info@redcelladvisory.com. You may lodge a complaint with the Personal Data Protection Commission Thailand."],
                items: &[],
            },
            LegalSection {
                id: "security",
                title: "9. Security",
                paragraphs: &["We implement technical and organizational measures to protect data against unauthorized access, alteration, disclosure, or loss. No method is 100% secure."],
                items: &[],
            },
            LegalSection {
                id: "children",
                title: "10. Children",
                paragraphs: &["Our Services are not directed to children under 16. We do not knowingly collect data from children."],
                items: &[],
            },
            LegalSection {
                id: "third-party-links",
                title: "11. Third-party links",
                paragraphs: &["Our site may link to other websites; we are not responsible for their privacy practices."],
                items: &[],
            },
            LegalSection {
                id: "policy-changes",
                title: "12. Changes",
                paragraphs: &["We may update this Policy; we will post the new version with an updated date."],
                items: &[],
            },
            LegalSection {
                id: "contact-privacy",
                title: "13. Contact",
                paragraphs: &["Burakorn Partners Co., Ltd. — Suite 3064, 30th Floor, Bhiraj Tower at EmQuartier, 689 Sukhumvit Rd, Khlong Tan Nuea, Watthana, Bangkok 10110 Email: info@redcelladvisory.com"],
                items: &[],
            },
        ],
    },
    LegalDoc {
        slug: "dpa-gdpr",
        title: "Data Processing Agreement (DPA) & GDPR Notice",
        summary: "Data processing terms and GDPR compliance for our services.",
        last_updated: "December 15, 2024",
        sections: &[
            LegalSection {
                id: "definitions",
                title: "1. Definitions",
                paragraphs: &["\"Data Protection Laws\" means all laws relating to personal data, including GDPR, UK GDPR, and local equivalents. \"Customer Data\" means personal data provided by or collected for the Customer under the Agreement."],
                items: &[],
            },
            LegalSection {
                id: "roles-processing",
                title: "2. Roles & processing instructions",
                paragraphs: &["The Controller is the Customer; Burakorn Partners Co., Ltd. is the Processor.", "We process Customer Data only on documented instructions from the Customer, including those in this DPA and the Agreement, unless required by law."],
                items: &[],
            },
            LegalSection {
                id: "nature-purpose",
                title: "3. Nature & purpose of processing",
                paragraphs: &["Processing necessary to provide fraud-intelligence, verification, and investigative deliverables; hosting; storage; analysis; communications; and customer support."],
                items: &[],
            },
            LegalSection {
                id: "categories-data",
                title: "4. Categories of data & subjects",
                paragraphs: &["Contact data, identifiers, case-related details you lawfully provide; subjects may include your clients, counterparties, or related individuals. Special categories are not intended to be processed; if needed, Customer must ensure a lawful basis and notify us."],
                items: &[],
            },
            LegalSection {
                id: "confidentiality-dpa",
                title: "5. Confidentiality",
                paragraphs: &["We ensure personnel accessing Customer Data are subject to appropriate confidentiality obligations."],
                items: &[],
            },
            LegalSection {
                id: "security-dpa",
                title: "6. Security",
                paragraphs: &["We implement technical and organizational measures appropriate to the risk (access controls, encryption in transit, logical segregation, least privilege, monitoring, backup)."],
                items: &[],
            },
            LegalSection {
                id: "sub-processors",
                title: "7. Sub-processors",
                paragraphs: &["We may use vetted sub-processors (hosting, analytics, communication, storage). We will maintain an up-to-date list and impose written data-protection terms no less protective than this DPA. Customer authorizes the current list and will be notified of changes with an opportunity to object on reasonable grounds."],
                items: &[],
            },
            LegalSection {
                id: "international-transfers-dpa",
                title: "8. International transfers",
                paragraphs: &["Where Customer Data is transferred internationally, we implement appropriate safeguards (e.g., SCCs/IDTA) and conduct transfer assessments as required."],
                items: &[],
            },
            LegalSection {
                id: "assistance-controller",
                title: "9. Assistance to Controller",
                paragraphs: &["We will assist the Customer, taking into account the nature of processing, by:"],
                items: &["responding to data-subject requests (when directed by Customer),", "notifying Customer of personal-data breaches without undue delay and providing incident details,", "assisting with DPIAs and consultations with authorities where reasonably required."],
            },
            LegalSection {
                id: "audit",
                title: "10. Audit",
                paragraphs: &["Upon reasonable prior notice, we will make available information necessary to demonstrate compliance and allow audits by Customer or a mandated auditor, subject to confidentiality, security, and frequency limits."],
                items: &[],
            },
            LegalSection {
                id: "deletion-return",
                title: "11. Deletion or return",
                paragraphs: &["At termination of Services, at Customer's choice, we will delete or return Customer Data, unless retention is required by law."],
                items: &[],
            },
            LegalSection {
                id: "liability-dpa",
                title: "12. Liability",
                paragraphs: &["Liability is governed by the Agreement. Nothing in this DPA limits a data subject's rights under applicable law."],
                items: &[],
            },
            LegalSection {
                id: "precedence",
                title: "13. Order of precedence",
                paragraphs: &["If this DPA conflicts with the Agreement, this DPA controls to the extent of the conflict regarding processing of personal data."],
                items: &[],
            },
            LegalSection {
                id: "contact-notices",
                title: "14. Contact & notices",
                paragraphs: &["Notices regarding data protection should be sent to info@redcelladvisory.com"],
                items: &[],
            },
        ],
    },
    LegalDoc {
        slug: "aup",
        title: "Acceptable Use Policy",
        summary: "Rules for responsible and lawful use of our services.",
        last_updated: "January 9, 2025",
        sections: &[
            LegalSection {
                id: "overview",
                title: "1. Overview",
                paragraphs: &["This Acceptable Use Policy (\"AUP\") governs your use of Red Cell Advisory's services, platforms, and systems. By accessing our services, you agree to comply with this policy and use our services responsibly and lawfully."],
                items: &[],
            },
            LegalSection {
                id: "permitted-uses",
                title: "2. Permitted uses",
                paragraphs: &["You may use our services for:"],
                items: &["Legitimate fraud prevention and investigation", "Due diligence and risk assessment", "Compliance with legal and regulatory requirements", "Protection of business interests and assets", "Academic research with proper authorization"],
            },
            LegalSection {
                id: "prohibited-activities",
                title: "3. Prohibited activities",
                paragraphs: &["You must not use our services to:"],
                items: &["Engage in illegal activities or facilitate criminal conduct", "Harass, stalk, or threaten individuals", "Conduct unauthorized surveillance or invasion of privacy", "Discriminate based on protected characteristics", "Violate intellectual property rights", "Attempt to reverse-engineer or compromise our systems", "Share access credentials or resell services without authorization", "Use automated tools to scrape or extract data without permission"],
            },
            LegalSection {
                id: "data-protection",
                title: "4. Data protection requirements",
                paragraphs: &["When using our services, you must comply with applicable data protection laws including GDPR, CCPA, and local privacy regulations. You are responsible for ensuring you have lawful basis for processing personal data and must implement appropriate safeguards."],
                items: &[],
            },
            LegalSection {
                id: "compliance",
                title: "5. Legal compliance",
                paragraphs: &["You must ensure your use of our services complies with all applicable laws, regulations, and industry standards, including but not limited to anti-money laundering (AML), sanctions, export controls, and data protection requirements."],
                items: &[],
            },
            LegalSection {
                id: "reporting",
                title: "6. Reporting violations",
                paragraphs: &["If you become aware of any violation of this AUP, please report it immediately to security@redcelladvisory.com. We investigate all reports and take appropriate action."],
                items: &[],
            },
            LegalSection {
                id: "enforcement",
                title: "7. Enforcement",
                paragraphs: &["Violations of this AUP may result in suspension or termination of services, legal action, and reporting to relevant authorities. We reserve the right to investigate suspected violations and cooperate with law enforcement."],
                items: &[],
            },
            LegalSection {
                id: "contact",
                title: "8. Contact",
                paragraphs: &["For questions about this Acceptable Use Policy, contact us at legal@redcelladvisory.com or: Red Cell Advisory — a unit of Burakorn Partners Holding 30th Floor, Bhiraj Tower at EmQuartier, Sukhumvit Road, Khlong Tan Nuea, Watthana, Bangkok 10110"],
                items: &[],
            },
        ],
    },
    LegalDoc {
        slug: "anti-bribery",
        title: "Anti-Bribery Policy",
        summary: "Our zero-tolerance stance on bribery and corruption.",
        last_updated: "January 9, 2025",
        sections: &[
            LegalSection {
                id: "policy-statement",
                title: "1. Policy statement",
                paragraphs: &["Red Cell Advisory is committed to conducting business with integrity and in compliance with all applicable anti-bribery and anti-corruption laws. We have zero tolerance for bribery and corruption in any form, whether direct or indirect."],
                items: &[],
            },
            LegalSection {
                id: "scope",
                title: "2. Scope",
                paragraphs: &["This policy applies to all employees, contractors, consultants, agents, and business partners acting on behalf of Red Cell Advisory. It covers all business activities and relationships worldwide."],
                items: &[],
            },
            LegalSection {
                id: "definitions",
                title: "3. Definitions",
                paragraphs: &["Bribery: Offering, promising, giving, or accepting any financial or other advantage to induce or reward improper performance of a function or activity.", "Corruption: The abuse of entrusted power for private gain.", "Facilitation payments: Small payments made to secure or expedite routine government actions."],
                items: &[],
            },
            LegalSection {
                id: "prohibited-conduct",
                title: "4. Prohibited conduct",
                paragraphs: &["The following activities are strictly prohibited:"],
                items: &["Offering, promising, or giving bribes to any person or organization", "Accepting or soliciting bribes from any person or organization", "Making facilitation payments to government officials", "Engaging in any form of corruption or fraudulent activity", "Failing to report known or suspected bribery or corruption"],
            },
            LegalSection {
                id: "gifts-hospitality",
                title: "5. Gifts and hospitality",
                paragraphs: &["Modest gifts and reasonable hospitality may be acceptable if they are transparent, proportionate, and do not create an obligation or expectation of preferential treatment. All gifts and hospitality must be properly recorded and approved in accordance with our internal procedures."],
                items: &[],
            },
            LegalSection {
                id: "third-parties",
                title: "6. Third-party relationships",
                paragraphs: &["We conduct appropriate due diligence on all business partners, agents, and intermediaries. Third parties acting on our behalf must comply with this policy and applicable anti-bribery laws. We do not tolerate bribery by third parties."],
                items: &[],
            },
            LegalSection {
                id: "reporting",
                title: "7. Reporting concerns",
                paragraphs: &["All employees and business partners must report suspected bribery or corruption immediately. Reports can be made to:", "We prohibit retaliation against individuals who report concerns in good faith."],
                items: &["Direct supervisor or management", "Legal department: legal@redcelladvisory.com", "Confidential ethics hotline (where available)"],
            },
            LegalSection {
                id: "training",
                title: "8. Training and awareness",
                paragraphs: &["All personnel receive regular training on anti-bribery policies and procedures. Training is tailored to roles and risk exposure, with enhanced training for high-risk positions."],
                items: &[],
            },
            LegalSection {
                id: "enforcement",
                title: "9. Enforcement",
                paragraphs: &["Violations of this policy may result in disciplinary action up to and including termination of employment or business relationships. Violations may also result in criminal prosecution and civil liability."],
                items: &[],
            },
            LegalSection {
                id: "contact",
                title: "10. Contact",
                paragraphs: &["For questions about this Anti-Bribery Policy, contact us at legal@redcelladvisory.com or: Red Cell Advisory â€” a unit of Burakorn Partners Holding 30th Floor, Bhiraj Tower at EmQuartier, Sukhumvit Road, Khlong Tan Nuea, Watthana, Bangkok 10110"],
                items: &[],
            },
        ],
    },
    LegalDoc {
        slug: "sanctions-aml",
        title: "Sanctions & AML Policy",
        summary: "How we comply with sanctions and anti-money laundering rules.",
        last_updated: "January 9, 2025",
        sections: &[
            LegalSection {
                id: "overview",
                title: "1. Overview",
                paragraphs: &["Red Cell Advisory is committed to full compliance with all applicable sanctions and anti-money laundering (AML) laws and regulations. This policy outlines our framework for preventing money laundering, terrorist financing, and sanctions violations."],
                items: &[],
            },
            LegalSection {
                id: "sanctions-compliance",
                title: "2. Sanctions compliance",
                paragraphs: &["We comply with sanctions programs administered by:", "We do not engage in business with sanctioned individuals, entities, or countries, and we screen all clients and transactions against applicable sanctions lists."],
                items: &["United Nations Security Council", "United States (OFAC)", "European Union", "United Kingdom (HM Treasury)", "Other relevant jurisdictions"],
            },
            LegalSection {
                id: "aml-program",
                title: "3. Anti-Money Laundering program",
                paragraphs: &["Our AML program includes:"],
                items: &["Written policies and procedures", "Designated AML compliance officer", "Ongoing employee training", "Independent audit function", "Customer due diligence procedures", "Ongoing monitoring and reporting"],
            },
            LegalSection {
                id: "customer-due-diligence",
                title: "4. Customer due diligence",
                paragraphs: &["We conduct appropriate due diligence on all clients, including:"],
                items: &["Identity verification", "Beneficial ownership identification", "Risk assessment based on client profile", "Enhanced due diligence for high-risk clients", "Ongoing monitoring of client relationships"],
            },
            LegalSection {
                id: "screening-monitoring",
                title: "5. Screening and monitoring",
                paragraphs: &["We maintain robust screening and monitoring systems to detect suspicious activities and ensure compliance with sanctions requirements. This includes real-time screening against sanctions lists and ongoing transaction monitoring."],
                items: &[],
            },
            LegalSection {
                id: "record-keeping",
                title: "6. Record keeping",
                paragraphs: &["We maintain comprehensive records of all client due diligence, transactions, and compliance activities in accordance with applicable legal requirements. Records are retained for the required periods and made available to regulators upon request."],
                items: &[],
            },
            LegalSection {
                id: "reporting",
                title: "7. Suspicious activity reporting",
                paragraphs: &["We have procedures in place to identify, investigate, and report suspicious activities to relevant authorities as required by law. All employees are trained to recognize and report potential money laundering or sanctions violations."],
                items: &[],
            },
            LegalSection {
                id: "training",
                title: "8. Training and awareness",
                paragraphs: &["All employees receive regular training on AML and sanctions compliance appropriate to their roles. Training covers legal requirements, internal procedures, and red flag indicators."],
                items: &[],
            },
            LegalSection {
                id: "enforcement",
                title: "9. Enforcement",
                paragraphs: &["Violations of this policy may result in disciplinary action, termination of business relationships, and reporting to relevant authorities. We cooperate fully with law enforcement and regulatory investigations."],
                items: &[],
            },
            LegalSection {
                id: "contact",
                title: "10. Contact",
                paragraphs: &["For questions about sanctions and AML compliance, contact our compliance team at legal@redcelladvisory.com or: Red Cell Advisory — a unit of Burakorn Partners Holding 30th Floor, Bhiraj Tower at EmQuartier, Sukhumvit Road, Khlong Tan Nuea, Watthana, Bangkok 10110"],
                items: &[],
            },
        ],
    },
    LegalDoc {
        slug: "cookies",
        title: "Cookie Policy",
        summary: "How we use cookies and similar technologies on this website.",
        last_updated: "January 9, 2025",
        sections: &[
            LegalSection {
                id: "what-are-cookies",
                title: "1. What are cookies",
                paragraphs: &["Cookies are small text files that are placed on your device when you visit our website. They help us provide you with a better experience by remembering your preferences and understanding how you use our site."],
                items: &[],
            },
            LegalSection {
                id: "how-we-use-cookies",
                title: "2. How we use cookies",
                paragraphs: &["We use cookies to:"],
                items: &["Ensure our website functions properly", "Remember your preferences and settings", "Analyze website traffic and usage patterns", "Improve our services and user experience", "Provide security features", "Deliver relevant content and advertisements"],
            },
            LegalSection {
                id: "types-of-cookies",
                title: "3. Types of cookies we use",
                paragraphs: &["These cookies are necessary for the website to function and cannot be switched off. They are usually set in response to actions you take, such as setting privacy preferences or filling in forms.", "These cookies help us understand how visitors interact with our website by collecting and reporting information anonymously. This helps us improve our website's performance.", "These cookies enable enhanced functionality and personalization, such as remembering your preferences and providing customized content.", "These cookies track your browsing habits to deliver advertisements that are relevant to you and your interests. They also help measure the effectiveness of advertising campaigns."],
                items: &[],
            },
            LegalSection {
                id: "third-party-cookies",
                title: "4. Third-party cookies",
                paragraphs: &["We may use third-party services that place cookies on your device. These include analytics providers, advertising networks, and social media platforms. Each third party has its own privacy and cookie policies.", "Common third-party services we use include:"],
                items: &["Google Analytics for website analytics", "Social media platforms for content sharing", "Customer support tools", "Security and fraud prevention services"],
            },
            LegalSection {
                id: "managing-cookies",
                title: "5. Managing cookies",
                paragraphs: &["You can control and manage cookies in several ways:", "Most browsers allow you to view, delete, and block cookies. You can usually find these options in your browser's privacy or security settings.", "You can manage your cookie preferences through our cookie consent banner when you first visit our site, or by accessing our cookie preference center.", "Some third-party services provide opt-out tools for their cookies and tracking technologies."],
                items: &[],
            },
            LegalSection {
                id: "cookie-consent",
                title: "6. Cookie consent",
                paragraphs: &["When you first visit our website, we will ask for your consent to use non-essential cookies. You can withdraw your consent at any time by changing your cookie preferences or contacting us."],
                items: &[],
            },
            LegalSection {
                id: "updates",
                title: "7. Updates to this policy",
                paragraphs: &["We may update this Cookie Policy from time to time to reflect changes in our practices or applicable laws. We will notify you of any material changes by posting the updated policy on our website."],
                items: &[],
            },
            LegalSection {
                id: "contact",
                title: "8. Contact",
                paragraphs: &["If you have questions about our use of cookies, please contact us at legal@redcelladvisory.com or: Red Cell Advisory â€” a unit of Burakorn Partners Holding 30th Floor, Bhiraj Tower at EmQuartier, Sukhumvit Road, Khlong Tan Nuea, Watthana, Bangkok 10110"],
                items: &[],
            },
        ],
    },
    LegalDoc {
        slug: "accessibility",
        title: "Accessibility Statement",
        summary: "Our commitment to an accessible website for everyone.",
        last_updated: "January 9, 2025",
        sections: &[
            LegalSection {
                id: "commitment",
                title: "1. Our commitment",
                paragraphs: &["Red Cell Advisory is committed to ensuring digital accessibility for people with disabilities. We are continually improving the user experience for everyone and applying the relevant accessibility standards to ensure we provide equal access to information and functionality for all users."],
                items: &[],
            },
            LegalSection {
                id: "standards",
                title: "2. Accessibility standards",
                paragraphs: &["We strive to conform to the Web Content Accessibility Guidelines (WCAG) 2.1 Level AA standards published by the World Wide Web Consortium (W3C). These guidelines help make web content more accessible to people with disabilities and improve usability for all users."],
                items: &[],
            },
            LegalSection {
                id: "measures",
                title: "3. Accessibility measures",
                paragraphs: &["Red Cell Advisory takes the following measures to ensure accessibility:"],
                items: &["Include accessibility as part of our design and development process", "Provide alternative text for images and multimedia content", "Use semantic HTML markup for proper structure", "Ensure sufficient color contrast ratios", "Make all functionality available via keyboard navigation", "Provide clear and consistent navigation", "Use descriptive link text and headings", "Test with assistive technologies", "Conduct regular accessibility audits"],
            },
            LegalSection {
                id: "current-status",
                title: "4. Current accessibility status",
                paragraphs: &["We believe our website substantially conforms to WCAG 2.1 Level AA standards. We continue to monitor and improve accessibility across all areas of our digital presence."],
                items: &[],
            },
            LegalSection {
                id: "known-issues",
                title: "5. Known accessibility issues",
                paragraphs: &["We are aware of some accessibility challenges and are actively working to address them:", "If you encounter any accessibility barriers, please contact us so we can provide alternative access methods or address the issue."],
                items: &["Some third-party embedded content may not be fully accessible", "Complex data visualizations may require alternative formats", "Some PDF documents may not be fully accessible (we are working to remediate these)"],
            },
            LegalSection {
                id: "feedback",
                title: "6. Feedback and assistance",
                paragraphs: &["We welcome your feedback on the accessibility of our website. If you encounter accessibility barriers or need assistance accessing any content, please contact us:", "We aim to respond to accessibility feedback within 2 business days and will work with you to provide the information or functionality you need through an alternative communication method."],
                items: &["Email: accessibility@redcelladvisory.com", "Phone: Available upon request", "Mail: See contact information below"],
            },
            LegalSection {
                id: "improvements",
                title: "7. Ongoing improvements",
                paragraphs: &["We are committed to continuously improving accessibility. Our efforts include:"],
                items: &["Regular accessibility training for our development team", "Ongoing accessibility testing and auditing", "User testing with people with disabilities", "Staying current with accessibility best practices and standards", "Incorporating accessibility feedback into our development process"],
            },
            LegalSection {
                id: "contact",
                title: "8. Contact information",
                paragraphs: &["For accessibility-related questions, feedback, or assistance, please contact us: Email: accessibility@redcelladvisory.com Red Cell Advisory â€” a unit of Burakorn Partners Holding 30th Floor, Bhiraj Tower at EmQuartier, Sukhumvit Road, Khlong Tan Nuea, Watthana, Bangkok 10110", "This accessibility statement was last updated on January 9, 2025."],
                items: &[],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadcrumbs_use_known_labels_and_capitalize_others() {
        assert_eq!(
            breadcrumbs("/legal/dpa-gdpr"),
            vec![
                ("/legal".to_string(), "Legal".to_string()),
                ("/legal/dpa-gdpr".to_string(), "Data Processing & GDPR".to_string()),
            ]
        );
        assert_eq!(breadcrumb_label("cookies"), "Cookies");
        assert_eq!(breadcrumb_label("anti-bribery"), "Anti-bribery");
    }

    #[test]
    fn every_document_has_unique_sections() {
        assert_eq!(LEGAL_DOCS.len(), 8);
        for doc in LEGAL_DOCS {
            assert!(!doc.sections.is_empty(), "{} has no sections", doc.slug);
            let mut ids: Vec<&str> = doc.sections.iter().map(|s| s.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), doc.sections.len(), "{} repeats a section id", doc.slug);
        }
        assert_eq!(find_doc("terms").unwrap().sections.len(), 18);
        assert_eq!(featured_docs().count(), 3);
        assert!(find_doc("missing").is_none());
    }
}
