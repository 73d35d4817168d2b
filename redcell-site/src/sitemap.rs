use chrono::NaiveDate;

use crate::content::blog;

pub const STATIC_ROUTES: [&str; 11] = [
    "/",
    "/services",
    "/pricing",
    "/blog",
    "/faq",
    "/contact",
    "/submit",
    "/legal",
    "/legal/terms",
    "/legal/privacy",
    "/legal/dpa-gdpr",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Static routes stamped with `today`, then one entry per blog post
pub fn sitemap_entries(site_url: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    let statics = STATIC_ROUTES.iter().map(|route| SitemapEntry {
        url: format!("{}{}", site_url, route),
        last_modified: today,
        change_frequency: ChangeFrequency::Weekly,
        priority: if *route == "/" { 1.0 } else { 0.7 },
    });

    let posts = blog::POSTS.iter().map(|post| SitemapEntry {
        url: format!("{}{}", site_url, post.url()),
        last_modified: post.modified().unwrap_or(today),
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    });

    statics.chain(posts).collect()
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(site_url: &str) -> String {
    format!("User-Agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", site_url)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
