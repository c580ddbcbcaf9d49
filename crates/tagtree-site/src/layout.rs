//! Shared document shell.

use tagtree_config::SiteConfig;
use tagtree_html::Node;
use tagtree_html::tags::{body, head, html, meta, title as title_tag};

/// Wrap `content` in `<html><head>..</head><body>..</body></html>`.
///
/// The document language comes from `site.lang`; the `<title>` reads
/// `"{title} | {site.title}"`.
pub fn layout(site: &SiteConfig, title: &str, content: impl Into<Node>) -> Node {
    html()
        .attr("lang", &site.lang)
        .child(
            head()
                .child(meta().attr("charset", "UTF-8"))
                .child(
                    meta()
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(title_tag().child(format!("{title} | {}", site.title))),
        )
        .child(body().child(content))
        .into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tagtree_html::Render;
    use tagtree_html::tags::p;

    use super::*;

    #[test]
    fn test_layout_structure() {
        let site = SiteConfig::default();
        let page = layout(&site, "Home", p().child("Hi"));

        assert_eq!(
            page.render().unwrap(),
            concat!(
                r#"<html lang="en"><head><meta charset="UTF-8">"#,
                r#"<meta content="width=device-width, initial-scale=1" name="viewport">"#,
                "<title>Home | tagtree</title></head>",
                "<body><p>Hi</p></body></html>",
            )
        );
    }

    #[test]
    fn test_layout_uses_site_settings() {
        let site = SiteConfig {
            title: "Docs & Notes".to_owned(),
            lang: "pt-BR".to_owned(),
            ..SiteConfig::default()
        };
        let html = layout(&site, "Start", Node::empty()).render().unwrap();

        assert!(html.starts_with(r#"<html lang="pt-BR">"#));
        assert!(html.contains("<title>Start | Docs &amp; Notes</title>"));
        assert!(html.ends_with("<body></body></html>"));
    }
}
