//! Plain-text outputs served next to the page: `robots.txt` and `sitemap.xml`.

use crate::types::Timestamp;

/// Strip trailing slashes so paths can be appended with a single `/`.
pub fn normalize_site_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Render `robots.txt` for the given base URL.
pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin/\nDisallow: /api/v1/admin/\n\nSitemap: {site_url}/sitemap.xml\n"
    )
}

/// Render a one-entry sitemap for the site root.
///
/// `last_modified` is the newest content change; the `<lastmod>` element is
/// omitted when there is no content yet.
pub fn render_sitemap(site_url: &str, last_modified: Option<Timestamp>) -> String {
    let loc = escape_xml(&format!("{site_url}/"));
    let lastmod = last_modified
        .map(|ts| format!("\n    <lastmod>{}</lastmod>", ts.format("%Y-%m-%d")))
        .unwrap_or_default();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
         <url>\n    <loc>{loc}</loc>{lastmod}\n    <changefreq>monthly</changefreq>\n    \
         <priority>1.0</priority>\n  </url>\n</urlset>\n"
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
