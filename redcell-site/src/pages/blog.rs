use serde::Deserialize;
use serde_json::{Value, json};
use std::fmt::Write;

use super::layout::{PageContext, PageMeta, escape_html, render_page};
use crate::content::blog::{
    self, ALL_CATEGORIES, BLOG_BASE_URL, CATEGORIES, PageItem, Post, filter_posts, page_url,
    paginate, related_posts, total_pages, visible_pages,
};

const BLOG_DESCRIPTION: &str = "Insights from Red Cell Advisory's investigations into fraud schemes, intelligence techniques, and cross-border risks.";

/// `?q=` and `?cat=` on the blog listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogQuery {
    pub q: Option<String>,
    pub cat: Option<String>,
}

impl BlogQuery {
    pub fn search(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.cat
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(ALL_CATEGORIES)
    }

    pub fn has_filters(&self) -> bool {
        !self.search().is_empty() || self.category() != ALL_CATEGORIES
    }

    /// Query string for links that keep the current filters
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if !self.search().is_empty() {
            params.push(format!("q={}", urlencoding::encode(self.search())));
        }
        if self.category() != ALL_CATEGORIES {
            params.push(format!("cat={}", urlencoding::encode(self.category())));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Number of listing pages with no filters applied
pub fn unfiltered_page_count() -> usize {
    total_pages(blog::POSTS.len())
}

fn render_card(post: &Post, featured: bool) -> String {
    let mut card = String::new();
    let _ = write!(
        card,
        "<article class=\"blog-card{}\"><a href=\"{}\">",
        if featured { " featured" } else { "" },
        escape_html(&post.url())
    );
    if let Some(image) = post.image {
        let _ = write!(
            card,
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape_html(image),
            escape_html(post.title)
        );
    }
    let _ = write!(
        card,
        "<span class=\"badge\">{}</span>{}<h2>{}</h2><p>{}</p><p class=\"meta\"><time datetime=\"{}\">{}</time> &middot; {}</p></a></article>",
        escape_html(post.category()),
        if featured { "<span class=\"badge badge-featured\">Featured</span>" } else { "" },
        escape_html(post.title),
        escape_html(post.meta),
        post.date_published,
        escape_html(&post.display_date()),
        post.reading_time()
    );
    card
}

fn render_pagination(current: usize, total: usize) -> String {
    if total <= 1 {
        return String::new();
    }
    let mut nav = String::from("<nav class=\"pagination\" aria-label=\"Blog pagination\">");
    if current > 1 {
        let _ = write!(
            nav,
            "<a href=\"{}\" aria-label=\"Go to previous page\">Newer</a>",
            page_url(BLOG_BASE_URL, current - 1)
        );
    } else {
        nav.push_str("<span aria-disabled=\"true\">Newer</span>");
    }
    for item in visible_pages(current, total) {
        match item {
            PageItem::Ellipsis => nav.push_str("<span class=\"ellipsis\">&hellip;</span>"),
            PageItem::Page(n) if n == current => {
                let _ = write!(nav, "<span aria-current=\"page\">{}</span>", n);
            }
            PageItem::Page(n) => {
                let _ = write!(
                    nav,
                    "<a href=\"{}\" aria-label=\"Go to page {}\">{}</a>",
                    page_url(BLOG_BASE_URL, n),
                    n,
                    n
                );
            }
        }
    }
    if current < total {
        let _ = write!(
            nav,
            "<a href=\"{}\" aria-label=\"Go to next page\">Older</a>",
            page_url(BLOG_BASE_URL, current + 1)
        );
    } else {
        nav.push_str("<span aria-disabled=\"true\">Older</span>");
    }
    nav.push_str("</nav>");
    nav
}

fn render_filters(query: &BlogQuery) -> String {
    let mut form = format!(
        "<form class=\"blog-filters\" method=\"get\" action=\"{}\" role=\"search\"><input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search articles...\" aria-label=\"Search articles by title or content\"><div class=\"category-pills\">",
        BLOG_BASE_URL,
        escape_html(query.search())
    );
    for category in CATEGORIES {
        let _ = write!(
            form,
            "<button type=\"submit\" name=\"cat\" value=\"{}\" aria-pressed=\"{}\">{}</button>",
            escape_html(category),
            query.category() == category,
            escape_html(category)
        );
    }
    form.push_str("</div>");
    if query.has_filters() {
        let _ = write!(form, "<a href=\"{}\" aria-label=\"Clear all filters\">Clear</a>", BLOG_BASE_URL);
    }
    form.push_str("</form>");
    form
}

/// Listing for one page. Callers check the page range first.
pub fn blog_listing_page(ctx: &PageContext, query: &BlogQuery, page: usize) -> String {
    let filtered = filter_posts(Some(query.category()), query.search());
    let total = total_pages(filtered.len());

    let title = if page > 1 {
        format!("Blog - Page {}", page)
    } else {
        "Blog".to_string()
    };
    let blog_posts: Vec<Value> = filtered
        .iter()
        .map(|post| {
            json!({
                "@type": "BlogPosting",
                "headline": post.title,
                "description": post.meta,
                "url": format!("{}{}", ctx.site_url, post.url()),
                "datePublished": post.date_published,
                "dateModified": post.date_modified,
                "author": {"@type": "Organization", "name": post.author.name, "url": post.author.url},
            })
        })
        .collect();
    let meta = PageMeta::new(title, BLOG_DESCRIPTION).with_structured_data(json!({
        "@context": "https://schema.org",
        "@type": "Blog",
        "name": "Red Cell Advisory Blog",
        "description": BLOG_DESCRIPTION,
        "url": format!("{}{}", ctx.site_url, BLOG_BASE_URL),
        "blogPost": blog_posts,
    }));

    let mut body = String::from(
        "<section class=\"page-hero\"><h1>RedCell Intelligence Briefing</h1><p>Real-world fraud intelligence from our global investigations team</p></section>",
    );
    body.push_str(&render_filters(query));

    if filtered.is_empty() {
        let _ = write!(
            body,
            "<section class=\"empty\"><p class=\"results-count\">No articles found</p><p>Try adjusting your search terms or clearing the filters.</p><a class=\"btn\" href=\"{}\">Clear Filters</a></section>",
            BLOG_BASE_URL
        );
        return render_page(ctx, &meta, &body);
    }

    let _ = write!(
        body,
        "<p class=\"results-count\">Showing {} article{}{}</p><section class=\"blog-grid\">",
        filtered.len(),
        if filtered.len() == 1 { "" } else { "s" },
        if query.has_filters() { " matching your criteria" } else { "" }
    );
    for (index, post) in paginate(&filtered, page).iter().enumerate() {
        body.push_str(&render_card(post, index == 0));
    }
    body.push_str("</section>");

    if !query.has_filters() {
        body.push_str(&render_pagination(page, total));
    }
    render_page(ctx, &meta, &body)
}

pub fn blog_post_page(ctx: &PageContext, post: &Post) -> String {
    let meta = PageMeta::new(post.title, post.meta).with_structured_data(json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.meta,
        "url": format!("{}{}", ctx.site_url, post.url()),
        "datePublished": post.date_published,
        "dateModified": post.date_modified,
        "author": {"@type": "Organization", "name": post.author.name, "url": post.author.url},
        "image": post.image.map(|image| format!("{}{}", ctx.site_url, image)),
    }));

    let mut body = String::new();
    let _ = write!(
        body,
        "<article class=\"post\"><nav aria-label=\"Breadcrumb\"><a href=\"/\">Home</a> / <a href=\"{base}\">Blog</a></nav><header><span class=\"badge\">{category}</span><h1>{title}</h1><p class=\"meta\">By <a href=\"{author_url}\">{author}</a> &middot; <time datetime=\"{date}\">{display_date}</time> &middot; {reading}</p></header>",
        base = BLOG_BASE_URL,
        category = escape_html(post.category()),
        title = escape_html(post.title),
        author_url = escape_html(post.author.url),
        author = escape_html(post.author.name),
        date = post.date_published,
        display_date = escape_html(&post.display_date()),
        reading = post.reading_time(),
    );
    if let Some(image) = post.image {
        let _ = write!(
            body,
            "<img class=\"post-image\" src=\"{}\" alt=\"{}\">",
            escape_html(image),
            escape_html(post.title)
        );
    }
    body.push_str("<div class=\"post-body\">");
    for paragraph in post.paragraphs() {
        let _ = write!(body, "<p>{}</p>", escape_html(paragraph));
    }
    body.push_str("</div>");

    let related = related_posts(post, 3);
    if !related.is_empty() {
        body.push_str("<aside class=\"related\"><h2>Related briefings</h2>");
        for other in related {
            body.push_str(&render_card(other, false));
        }
        body.push_str("</aside>");
    }
    body.push_str("<section class=\"cta\"><h2>Worried about a counterparty?</h2><a class=\"btn btn-primary\" href=\"/submit\" data-cta=\"run_check\">Run a Check</a></section></article>");
    render_page(ctx, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> PageContext {
        PageContext::new("/blog", "https://x.test", false)
    }

    #[test]
    fn first_page_shows_nine_and_pagination() {
        let html = blog_listing_page(&ctx(), &BlogQuery::default(), 1);
        assert_eq!(html.matches("<article class=\"blog-card").count(), 9);
        assert!(html.contains("Blog pagination"));
        assert!(html.contains("href=\"/blog/page/2\""));
        assert!(html.contains(&format!("Showing {} articles", blog::POSTS.len())));
    }

    #[test]
    fn filters_hide_pagination_and_escape_the_query() {
        let query = BlogQuery {
            q: Some("<script>".to_string()),
            cat: None,
        };
        let html = blog_listing_page(&ctx(), &query, 1);
        assert!(html.contains("No articles found"));
        assert!(html.contains("value=\"&lt;script&gt;\""));

        let query = BlogQuery {
            q: None,
            cat: Some("How-To".to_string()),
        };
        let html = blog_listing_page(&ctx(), &query, 1);
        assert!(html.contains("Showing 3 articles matching your criteria"));
        assert!(!html.contains("Blog pagination"));
        assert_eq!(query.to_query_string(), "?cat=How-To");
    }

    #[test]
    fn post_page_renders_paragraphs_and_related() {
        let post = blog::find_post("swift-recall-what-works").unwrap();
        let html = blog_post_page(&ctx(), post);
        assert!(html.contains("<h1>SWIFT Recalls: What Actually Works After a Bad Transfer</h1>"));
        assert!(html.contains("Related briefings"));
        assert!(html.matches("<p>").count() >= post.paragraphs().count());
    }
}
