#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    /// Trusted HTML, may contain `<br/>`
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FaqCategory {
    pub name: &'static str,
    pub entries: &'static [FaqEntry],
}

pub const FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        name: "Our Services",
        entries: &[
            FaqEntry {
                id: "lite-scout-report",
                question: "What exactly is a \"Lite Scout\" report?",
                answer: "A rapid fraud and risk check. We review high-signal sources (sanctions/PEP lists, corporate registries, adverse media, basic OSINT) and return a concise brief highlighting red flags or clearance.",
            },
            FaqEntry {
                id: "package-timelines",
                question: "How long do the different packages take?",
                answer: "Lite Scout: typically 48 hours<br/>Tactical Probe: 5–7 business days<br/>Strategic Due Diligence: 10–15 business days<br/>Reclamation Ops: timeline depends on case complexity and counterparties",
            },
            FaqEntry {
                id: "jurisdiction-coverage",
                question: "Which jurisdictions do you cover?",
                answer: "Global coverage with emphasis on Asia, Europe, Africa, and Latin America. We engage vetted local resources where required and respect local laws and data-access rules.",
            },
            FaqEntry {
                id: "data-sources",
                question: "Where does your data come from?",
                answer: "Global corporate registries, sanctions and watchlists, court filings, media archives, open-source intelligence (OSINT), and licensed databases—analyzed by our human investigators.",
            },
            FaqEntry {
                id: "supplier-verification",
                question: "Can you verify international suppliers before I engage them?",
                answer: "Yes. We validate corporate identity, beneficial ownership, trading history, litigation/adverse media, and operational footprint—flagging clone sites, shell entities, or trade fraud patterns.",
            },
        ],
    },
    FaqCategory {
        name: "Engagement & Process",
        entries: &[
            FaqEntry {
                id: "confidentiality",
                question: "Is my information kept confidential?",
                answer: "Yes. We operate under strict confidentiality. Case data is handled on a need-to-know basis and protected by technical and organizational controls. We comply with GDPR/Thailand PDPA where applicable.",
            },
            FaqEntry {
                id: "payment-refunds",
                question: "How do I pay and is it refundable?",
                answer: "Payments are made securely. Some services require a retainer. Due to the nature of investigative work, fees are generally non-refundable once work begins; any exceptions will be stated in your engagement letter.",
            },
            FaqEntry {
                id: "agents-referrers",
                question: "Do you work with agents or referrers?",
                answer: "In certain jurisdictions we coordinate with vetted local partners. All engagements remain under Red Cell Advisory oversight and quality control.",
            },
            FaqEntry {
                id: "case-submission-process",
                question: "What happens after I submit a case?",
                answer: "You'll receive a confirmation and a timeline. We may request documents or clarifications. Interim red flags are escalated early; final deliverables are provided in a written brief with recommended actions.",
            },
            FaqEntry {
                id: "legal-team-coordination",
                question: "Can you liaise with my legal team or compliance?",
                answer: "Yes. We commonly coordinate with in-house counsel, external law firms, and compliance teams to align findings with legal strategy.",
            },
        ],
    },
    FaqCategory {
        name: "Outcomes & Support",
        entries: &[
            FaqEntry {
                id: "recovery-guarantee",
                question: "Do you guarantee that my funds will be recovered?",
                answer: "No firm can guarantee recovery. We provide intelligence and an action plan to maximize your chances through law-enforcement, banks, and civil remedies.",
            },
            FaqEntry {
                id: "court-testimony",
                question: "Can you testify in court or provide affidavits?",
                answer: "Yes—subject to jurisdiction. We can supply sworn statements and, when appropriate, expert testimony based on our work.",
            },
            FaqEntry {
                id: "foreign-authorities",
                question: "Can you contact foreign police or banks on my behalf?",
                answer: "We can guide documentation and escalation. In some cases we liaise directly with banks or authorities, depending on local requirements and your authorization.",
            },
            FaqEntry {
                id: "deliverables",
                question: "What deliverables do I receive?",
                answer: "A structured PDF/brief (and optional data annex) summarizing findings, risk assessment, and recommended next steps. For Reclamation Ops, you also get a phased recovery plan.",
            },
            FaqEntry {
                id: "multi-country-subjects",
                question: "What if the subject is in multiple countries?",
                answer: "Cross-border is our specialization. We map entities/people across jurisdictions and coordinate intelligence to avoid gaps between legal systems.",
            },
        ],
    },
];

/// Matching entries grouped by category. Categories with no match are dropped;
/// a blank query returns everything.
pub fn search_faq(query: &str) -> Vec<(&'static str, Vec<&'static FaqEntry>)> {
    let needle = query.trim().to_lowercase();
    FAQ_CATEGORIES
        .iter()
        .filter_map(|category| {
            let matches: Vec<&'static FaqEntry> = category
                .entries
                .iter()
                .filter(|entry| {
                    needle.is_empty()
                        || entry.question.to_lowercase().contains(&needle)
                        || entry.answer.to_lowercase().contains(&needle)
                })
                .collect();
            (!matches.is_empty()).then_some((category.name, matches))
        })
        .collect()
}

pub fn total_entries() -> usize {
    FAQ_CATEGORIES.iter().map(|c| c.entries.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_all_fifteen() {
        let all = search_faq("   ");
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().map(|(_, e)| e.len()).sum::<usize>(), total_entries());
        assert_eq!(total_entries(), 15);
    }

    #[test]
    fn search_is_case_insensitive_and_drops_empty_categories() {
        let results = search_faq("TESTIFY");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "Outcomes & Support");
        assert_eq!(results[0].1[0].id, "court-testimony");

        // matches an answer only
        let results = search_faq("pdpa");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1[0].id, "confidentiality");

        assert!(search_faq("zzz-no-match").is_empty());
    }
}
