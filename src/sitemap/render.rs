//! Sitemap XML rendering
//!
//! Produces a sitemaps.org `<urlset>` document with the three fixed pages
//! followed by one entry per blog slug. Slugs are written verbatim: a slug
//! containing `&`, `<` or `>` produces invalid XML.

use super::slug::Slug;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

const URLSET_OPEN: &str = concat!(
    r#"<urlset xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#,
    r#" xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#,
    r#" xsi:schemaLocation="http://www.sitemaps.org/schemas/sitemap/0.9"#,
    r#" http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd">"#,
);

const URLSET_CLOSE: &str = "</urlset>";

/// Fixed top-level paths, emitted after the site root
pub const STATIC_PATHS: [&str; 2] = ["/about", "/blog"];

/// Prefix under which every slug is published
pub const BLOG_PREFIX: &str = "/blog";

/// Render the sitemap document for `base_url` and `slugs`
pub fn render(base_url: &str, slugs: &[Slug]) -> String {
    let mut xml = String::with_capacity(512 + slugs.len() * (base_url.len() + 64));

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(URLSET_OPEN);
    xml.push('\n');

    push_url(&mut xml, base_url, &[]);
    for path in STATIC_PATHS {
        push_url(&mut xml, base_url, &[path]);
    }
    for slug in slugs {
        push_url(&mut xml, base_url, &[BLOG_PREFIX, "/", slug.as_str()]);
    }

    xml.push_str(URLSET_CLOSE);
    xml.push('\n');
    xml
}

/// Append one `<url>` entry whose location is `base_url` followed by `path_parts`
fn push_url(xml: &mut String, base_url: &str, path_parts: &[&str]) {
    xml.push_str("    <url>\n        <loc>");
    xml.push_str(base_url);
    for part in path_parts {
        xml.push_str(part);
    }
    xml.push_str("</loc>\n    </url>\n");
}
