//! Blog posts and the listing logic behind `/blog`.

use chrono::NaiveDate;

pub const POSTS_PER_PAGE: usize = 9;
pub const WORDS_PER_MINUTE: usize = 200;
pub const BLOG_BASE_URL: &str = "/blog";

pub const ALL_CATEGORIES: &str = "All";
pub const CATEGORIES: [&str; 5] = [ALL_CATEGORIES, "Fraud Intel", "Case Study", "How-To", "News"];

#[derive(Debug, Clone, Copy)]
pub struct Author {
    pub name: &'static str,
    pub url: &'static str,
}

const DESK: Author = Author {
    name: "Red Cell Advisory",
    url: "https://redcells.vercel.app",
};

#[derive(Debug, Clone, Copy)]
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub meta: &'static str,
    /// ISO `YYYY-MM-DD`
    pub date_published: &'static str,
    pub date_modified: &'static str,
    pub author: Author,
    pub image: Option<&'static str>,
    /// Paragraphs separated by blank lines
    pub content: &'static str,
}

impl Post {
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_published, "%Y-%m-%d").ok()
    }

    pub fn modified(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_modified, "%Y-%m-%d").ok()
    }

    pub fn category(&self) -> &'static str {
        category_for_slug(self.slug)
    }

    pub fn reading_time(&self) -> String {
        reading_time(self.content)
    }

    /// e.g. `Mar 4, 2025`
    pub fn display_date(&self) -> String {
        self.published()
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| self.date_published.to_string())
    }

    pub fn url(&self) -> String {
        format!("{}/{}", BLOG_BASE_URL, self.slug)
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

pub fn category_for_slug(slug: &str) -> &'static str {
    if slug.contains("fraud") || slug.contains("aff") {
        "Fraud Intel"
    } else if slug.contains("verify") || slug.contains("swift") || slug.contains("dnslytics") {
        "How-To"
    } else if slug.contains("foreign-police") {
        "Case Study"
    } else {
        "News"
    }
}

pub fn reading_minutes(content: &str) -> usize {
    content.split_whitespace().count().div_ceil(WORDS_PER_MINUTE)
}

pub fn reading_time(content: &str) -> String {
    format!("{} min read", reading_minutes(content))
}

/// Every post, newest first
pub fn all_posts() -> Vec<&'static Post> {
    filter_posts(None, "")
}

pub fn find_post(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|p| p.slug == slug)
}

/// Category `None` or `"All"` keeps every category. The query matches title or
/// meta description, case-insensitively.
pub fn filter_posts(category: Option<&str>, query: &str) -> Vec<&'static Post> {
    let needle = query.trim().to_lowercase();
    let mut posts: Vec<&'static Post> = POSTS
        .iter()
        .filter(|post| match category {
            None | Some(ALL_CATEGORIES) => true,
            Some(cat) => post.category() == cat,
        })
        .filter(|post| {
            needle.is_empty()
                || post.title.to_lowercase().contains(&needle)
                || post.meta.to_lowercase().contains(&needle)
        })
        .collect();
    posts.sort_by(|a, b| b.published().cmp(&a.published()));
    posts
}

/// Up to `limit` other posts from the same category
pub fn related_posts(post: &Post, limit: usize) -> Vec<&'static Post> {
    filter_posts(Some(post.category()), "")
        .into_iter()
        .filter(|p| p.slug != post.slug)
        .take(limit)
        .collect()
}

pub fn total_pages(post_count: usize) -> usize {
    post_count.div_ceil(POSTS_PER_PAGE)
}

/// Posts on a 1-based page; out of range pages are empty
pub fn paginate<'a>(posts: &'a [&'static Post], page: usize) -> &'a [&'static Post] {
    let start = page.saturating_sub(1).saturating_mul(POSTS_PER_PAGE);
    if page == 0 || start >= posts.len() {
        return &[];
    }
    let end = (start + POSTS_PER_PAGE).min(posts.len());
    &posts[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page links around `current`: first and last always shown, two neighbours on
/// each side, gaps collapsed into an ellipsis.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageItem> {
    const DELTA: usize = 2;
    let mut items = vec![PageItem::Page(1)];
    if current > DELTA + 2 {
        items.push(PageItem::Ellipsis);
    }

    let low = current.saturating_sub(DELTA).max(2);
    let high = (current + DELTA).min(total.saturating_sub(1));
    items.extend((low..=high).map(PageItem::Page));

    if current + DELTA + 1 < total {
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if total > 1 {
        items.push(PageItem::Page(total));
    }
    items
}

pub fn page_url(base_url: &str, page: usize) -> String {
    if page == 1 {
        base_url.to_string()
    } else {
        format!("{}/page/{}", base_url, page)
    }
}

pub static POSTS: &[Post] = &[
    Post {
        slug: "aff-payment-fraud-red-flags",
        title: "Advance-Fee Payment Fraud: Seven Red Flags Before You Wire",
        meta: "How advance-fee fraud rings pressure importers into 100% T/T pre-payments, and the signals that expose them early.",
        date_published: "2025-06-12",
        date_modified: "2025-06-20",
        author: DESK,
        image: Some("/images/blog/aff-red-flags.jpg"),
        content: "Advance-fee fraud against importers rarely looks like fraud on day one. The supplier answers quickly, the pro forma invoice is clean, and the price is just low enough to be attractive.\n\nThe first red flag is payment pressure. Sellers who insist on 100% telegraphic transfer before shipment, and who refuse letters of credit or escrow, shift the whole risk to you.\n\nThe second is a beneficiary mismatch. When the receiving account belongs to a person or to a company other than the one on the contract, stop and verify.\n\nThird, look at the footprint. Domains registered weeks ago, mobile-only contacts and cloned product photos are typical of short-lived storefronts.\n\nFourth, registry records that do not match the story: a trading giant that turns out to be a microcompany registered last quarter at a shared address.\n\nFinally, urgency. Artificial deadlines, sudden price rises and 'last container' claims are designed to stop you from checking. A two-hour check costs far less than a lost deposit.",
    },
    Post {
        slug: "how-to-verify-a-thai-company",
        title: "How to Verify a Thai Company in the DBD Registry",
        meta: "A step-by-step guide to checking registration, directors and paid-up capital of a Thai counterparty.",
        date_published: "2025-05-28",
        date_modified: "2025-05-28",
        author: DESK,
        image: None,
        content: "Every Thai limited company is registered with the Department of Business Development. The DBD record is the first thing to pull before paying a Thai supplier.\n\nSearch by the 13-digit juristic person number rather than by name. Names are easy to imitate; numbers are not.\n\nCompare registered capital with paid-up capital. A company claiming large export volumes with a token paid-up amount deserves a closer look.\n\nCheck the directors and the registered address. Several unrelated companies at the same address, all recently incorporated, is a common pattern in supplier fraud clusters.\n\nFinally, confirm that the bank account on the invoice is in the company's own name.",
    },
    Post {
        slug: "swift-recall-what-works",
        title: "SWIFT Recalls: What Actually Works After a Bad Transfer",
        meta: "Timing, wording and escalation paths that improve the odds of recalling a fraudulent international wire.",
        date_published: "2025-05-09",
        date_modified: "2025-05-15",
        author: DESK,
        image: None,
        content: "A SWIFT recall is a request, not a guarantee. The beneficiary bank can only return funds that are still there, and only with the account holder's consent or a legal basis.\n\nSpeed matters more than anything. Ask your bank to send the recall the same day and to flag it as fraud, not as an operational error.\n\nFile a police report in your home jurisdiction immediately and share the reference with both banks. A report number changes how compliance teams treat the request.\n\nIn parallel, prepare for local action where the receiving account sits. Interim freezing orders and criminal complaints there carry far more weight than correspondence from abroad.",
    },
    Post {
        slug: "dnslytics-domain-footprint",
        title: "Mapping a Supplier's Domain Footprint with DNSlytics",
        meta: "Use reverse IP and shared-infrastructure lookups to connect cloned supplier websites.",
        date_published: "2025-04-22",
        date_modified: "2025-04-22",
        author: DESK,
        image: None,
        content: "Fraud networks reuse infrastructure. The same hosting account often serves a dozen near-identical storefronts selling fertilizer, cooking oil or solar panels.\n\nStart with the supplier's domain and look up its hosting IP. A reverse IP lookup lists other domains on the same server.\n\nNext, check shared analytics and advertising identifiers. Cloned templates frequently keep the original tracking codes, which links sites that look unrelated.\n\nRecord creation dates for every domain you find. A cluster of sites registered within days of each other is a strong signal of a coordinated operation.",
    },
    Post {
        slug: "foreign-police-report-thailand",
        title: "Filing with Foreign Police: A Thailand Case Walkthrough",
        meta: "How a European buyer turned a stalled complaint into an account freeze by working with Thai investigators.",
        date_published: "2025-04-03",
        date_modified: "2025-04-10",
        author: DESK,
        image: Some("/images/blog/foreign-police.jpg"),
        content: "Our client had paid a Thai supplier for a shipment that never left the warehouse. A complaint filed at home had gone nowhere for two months.\n\nWe prepared a bilingual evidence pack: contracts, payment confirmations, chat logs, registry extracts and a clear timeline. Every exhibit was numbered and hashed.\n\nThe complaint was filed with the specialised cybercrime unit, with a request to notify the receiving bank. Within ten days the account was frozen pending investigation.\n\nThe lesson: foreign authorities act on complete, local-language files. Preparation is the difference between a case that moves and one that stalls.",
    },
    Post {
        slug: "fertilizer-supplier-fraud-network",
        title: "Inside a Fertilizer Supplier Fraud Network",
        meta: "Shared addresses, ghost logistics firms and cloned sites: anatomy of a network targeting commodity buyers.",
        date_published: "2025-03-18",
        date_modified: "2025-03-25",
        author: DESK,
        image: None,
        content: "Commodity buyers searching for urea and DAP are a favourite target. The network we traced ran at least nine storefronts from three registered addresses.\n\nEach storefront introduced a 'logistics partner' that demanded freight and insurance fees upfront. None of the logistics firms appeared in the national registry.\n\nThe companies that did exist were retail microcompanies with minimal paid-up capital, incorporated within weeks of each other.\n\nVictims who paid were then asked for inspection fees, then for customs penalties. The pattern only ends when the buyer stops paying.",
    },
    Post {
        slug: "sanctions-exposure-through-affiliates",
        title: "Indirect Sanctions Exposure Through Affiliates",
        meta: "Why a clean counterparty can still expose you to sanctions risk through its group structure.",
        date_published: "2025-02-26",
        date_modified: "2025-03-02",
        author: DESK,
        image: None,
        content: "Screening the counterparty's name against sanctions lists is necessary but not sufficient. Exposure often sits one or two steps away.\n\nMap the shareholders and the affiliates. Shared directors, shared addresses and intra-group trading relationships can all carry risk.\n\nPay attention to trade flows. An affiliate shipping sanctioned commodities can put payments through the group under scrutiny by correspondent banks.\n\nDocument what you checked and when. A clear record of reasonable diligence is your best defence if questions come later.",
    },
    Post {
        slug: "frozen-funds-bank-compliance-holds",
        title: "Why Banks Freeze Incoming Trade Payments",
        meta: "Compliance holds, OFAC screening hits and what exporters can do to get funds released.",
        date_published: "2025-02-07",
        date_modified: "2025-02-07",
        author: DESK,
        image: None,
        content: "An incoming payment held by a bank is not necessarily lost. Most holds are compliance reviews triggered by names, routes or goods descriptions.\n\nAsk the bank exactly what information it needs. Invoices, bills of lading and proof of the underlying trade resolve most reviews.\n\nScreening hits on common names are frequent. A short memo showing why your counterparty is not the listed party can speed things up.\n\nWhere funds are frozen under a sanctions programme, a licence or a formal delisting request may be required, and timelines are longer.",
    },
    Post {
        slug: "hong-kong-shell-company-signals",
        title: "Hong Kong Shell Companies: Signals in the Registry",
        meta: "Capital reductions, secretarial addresses and naming tricks that reveal thin Hong Kong entities.",
        date_published: "2025-01-20",
        date_modified: "2025-01-28",
        author: DESK,
        image: None,
        content: "Hong Kong incorporations are quick and cheap, which makes them attractive for legitimate traders and for shells alike.\n\nLook at the filing history. Capital reductions, frequent director changes and missing annual returns all deserve attention.\n\nA company secretary's address shared by hundreds of companies says little about real operations. Ask for a physical office and verify it.\n\nBe wary of names suggesting state ownership or national status. Private firms sometimes borrow that authority to win trust.",
    },
    Post {
        slug: "pre-payment-checklist-2025",
        title: "The 2025 Pre-Payment Checklist for Importers",
        meta: "Ten checks to run before releasing a deposit to a new overseas supplier.",
        date_published: "2024-12-16",
        date_modified: "2025-01-05",
        author: DESK,
        image: None,
        content: "Before the first deposit leaves your account, run through the basics: registry record, directors, paid-up capital, licences, export history and bank account ownership.\n\nConfirm the supplier's physical presence with recent, verifiable evidence. Video calls from a warehouse are easy to stage; third-party inspections are not.\n\nNegotiate payment terms that match the risk: a smaller deposit, a letter of credit or a pilot lot.\n\nKeep every document. If something goes wrong, a complete file is what makes recovery possible.",
    },
    Post {
        slug: "crypto-exchange-asset-lock",
        title: "When a Crypto Exchange Locks Your Account",
        meta: "Practical steps for traders whose funds are locked by an exchange during a compliance review.",
        date_published: "2024-11-28",
        date_modified: "2024-12-02",
        author: DESK,
        image: None,
        content: "Exchanges lock accounts for many reasons: suspicious deposits, missing KYC documents or requests from law enforcement.\n\nStart with the exchange's own process. Provide exactly what is requested and keep copies of every submission.\n\nIf the lock follows a deposit from a compromised source, trace the funds on-chain and document your own good faith.\n\nWhere the exchange stops responding, regulators in its licensing jurisdiction and formal legal demands are the next levers.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn slug_categories() {
        assert_eq!(category_for_slug("aff-payment-fraud-red-flags"), "Fraud Intel");
        assert_eq!(category_for_slug("how-to-verify-a-thai-company"), "How-To");
        assert_eq!(category_for_slug("swift-recall-what-works"), "How-To");
        assert_eq!(category_for_slug("foreign-police-report-thailand"), "Case Study");
        assert_eq!(category_for_slug("pre-payment-checklist-2025"), "News");
        // "fraud" wins over "verify"
        assert_eq!(category_for_slug("verify-fraud"), "Fraud Intel");
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time(&"word ".repeat(200)), "1 min read");
        assert_eq!(reading_time(&"word ".repeat(201)), "2 min read");
    }

    #[test]
    fn posts_are_newest_first_and_filterable() {
        let posts = all_posts();
        assert_eq!(posts.len(), POSTS.len());
        assert!(posts.windows(2).all(|w| w[0].published() >= w[1].published()));

        let how_to = filter_posts(Some("How-To"), "");
        assert_eq!(how_to.len(), 3);
        assert!(how_to.iter().all(|p| p.category() == "How-To"));

        let hits = filter_posts(Some(ALL_CATEGORIES), "SWIFT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "swift-recall-what-works");

        assert!(filter_posts(Some("Case Study"), "fertilizer").is_empty());
    }

    #[test]
    fn pagination_slices_nine_per_page() {
        let posts = all_posts();
        assert_eq!(total_pages(posts.len()), 2);
        assert_eq!(paginate(&posts, 1).len(), 9);
        assert_eq!(paginate(&posts, 2).len(), posts.len() - 9);
        assert!(paginate(&posts, 3).is_empty());
        assert!(paginate(&posts, 0).is_empty());
        assert_eq!(total_pages(0), 0);
    }

    #[test]
    fn visible_page_list() {
        assert_eq!(visible_pages(1, 1), vec![Page(1)]);
        assert_eq!(visible_pages(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            visible_pages(1, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(5, 10),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            visible_pages(4, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn page_urls() {
        assert_eq!(page_url(BLOG_BASE_URL, 1), "/blog");
        assert_eq!(page_url(BLOG_BASE_URL, 3), "/blog/page/3");
    }

    #[test]
    fn related_posts_share_category() {
        let post = find_post("swift-recall-what-works").unwrap();
        let related = related_posts(post, 3);
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|p| p.category() == "How-To" && p.slug != post.slug));
    }
}
