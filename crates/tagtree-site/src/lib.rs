//! Page layout and bundled pages.
//!
//! Every page is an ordinary [`tagtree_html`] tree wrapped in the shared
//! [`layout`]. [`render_page`] turns a [`Page`] into a complete HTML
//! document using the site-wide [`SiteConfig`] (title, language, doctype).
//!
//! # Example
//!
//! ```
//! use tagtree_config::SiteConfig;
//! use tagtree_site::{Page, render_page};
//!
//! let html = render_page(&SiteConfig::default(), Page::Login).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
//! ```

mod layout;
mod pages;

use std::fmt;
use std::str::FromStr;

use tagtree_html::{Node, Render, RenderError, to_document};

pub use layout::layout;
pub use pages::{index_page, login_page, showcase_page};
pub use tagtree_config::SiteConfig;

/// Bundled pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Links to every other page.
    Index,
    /// Username/password form with an inline stylesheet.
    Login,
    /// Navigation, inline text semantics and a contact form.
    Showcase,
}

impl Page {
    /// Every bundled page, in index order.
    pub const ALL: [Page; 3] = [Page::Index, Page::Login, Page::Showcase];

    /// URL-safe page name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Login => "login",
            Self::Showcase => "showcase",
        }
    }

    /// Human-readable page title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Index => "Pages",
            Self::Login => "Login",
            Self::Showcase => "Showcase",
        }
    }

    /// Look up a page by [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.name() == name)
    }

    /// Build the page's tree, including the layout.
    #[must_use]
    pub fn build(self, site: &SiteConfig) -> Node {
        match self {
            Self::Index => index_page(site),
            Self::Login => login_page(site),
            Self::Showcase => showcase_page(site),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SiteError::UnknownPage(s.to_owned()))
    }
}

/// Error returned when building or rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No bundled page has this name.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// The page tree failed to render.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Render `page` to a complete HTML document.
///
/// # Errors
///
/// Returns [`SiteError::Render`] if the tree fails validation.
pub fn render_page(site: &SiteConfig, page: Page) -> Result<String, SiteError> {
    let tree = page.build(site);
    let html = if site.doctype {
        to_document(&tree)?
    } else {
        tree.render()?
    };
    tracing::debug!(page = %page, bytes = html.len(), "Rendered page");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_names_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.name()), Some(page));
            assert_eq!(page.name().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_unknown_page() {
        assert_eq!(Page::from_name("missing"), None);
        let err = "missing".parse::<Page>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown page: missing");
    }

    #[test]
    fn test_display() {
        assert_eq!(Page::Showcase.to_string(), "showcase");
    }

    #[test]
    fn test_render_page_doctype() {
        let site = SiteConfig::default();
        for page in Page::ALL {
            let html = render_page(&site, page).unwrap();
            assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
            assert!(html.ends_with("</body></html>"));
        }
    }

    #[test]
    fn test_render_page_without_doctype() {
        let site = SiteConfig {
            doctype: false,
            ..SiteConfig::default()
        };
        let html = render_page(&site, Page::Index).unwrap();
        assert!(html.starts_with("<html lang=\"en\">"));
    }

    #[test]
    fn test_render_page_matches_document_renderer() {
        let site = SiteConfig::default();
        let tree = Page::Login.build(&site);
        assert_eq!(
            render_page(&site, Page::Login).unwrap(),
            to_document(&tree).unwrap()
        );

        let bare = SiteConfig {
            doctype: false,
            ..SiteConfig::default()
        };
        assert_eq!(
            render_page(&bare, Page::Login).unwrap(),
            Page::Login.build(&bare).render().unwrap()
        );
    }

    #[test]
    fn test_render_page_is_deterministic() {
        let site = SiteConfig::default();
        assert_eq!(
            render_page(&site, Page::Showcase).unwrap(),
            render_page(&site, Page::Showcase).unwrap()
        );
    }
}
