//! # jamdelphia-site
//!
//! The JamDelphia Group LLC website as Leptos components.
//!
//! The page is a single document of six sections (navigation, hero, about,
//! portfolio, contact, footer). The same components serve two targets:
//!
//! - **Static render** (`ssr` feature, default) - [`render_site`] produces a
//!   complete `index.html` with no JavaScript, as the page looks at mount.
//! - **Browser build** (`csr` feature) - `landing/` mounts
//!   [`components::App`] so the mobile menu and the form respond to input.
//!
//! ## Quick Start
//!
//! ```rust
//! use jamdelphia_site::{render_site, RenderOptions, types::SiteContent};
//!
//! let html = render_site(&SiteContent::default(), &RenderOptions::with_year(2025));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Signature Seal Notary"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - page copy as serde data (ventures are a list, not markup)
//! - [`content`] - loading content files and validating them
//! - [`state`] - the menu flag and the form-local values
//! - [`components`] - Leptos UI components
//! - [`audit`] - anchor checks over rendered HTML
//! - [`styles`] - CSS constant

#![warn(rustdoc::missing_crate_level_docs)]

pub mod audit;
pub mod components;
pub mod content;
pub mod error;
pub mod state;
pub mod styles;
pub mod types;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::SiteContent;

pub use audit::{audit_anchors, AnchorReport};
pub use error::SiteError;

/// Options for [`render_site`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year printed in the footer copyright
    pub year: i32,
    /// Link this stylesheet instead of inlining [`styles::SITE_CSS`]
    pub stylesheet: Option<String>,
}

impl RenderOptions {
    pub fn with_year(year: i32) -> Self {
        Self {
            year,
            stylesheet: None,
        }
    }
}

/// Render the complete page to an HTML string.
///
/// The output reflects the initial state: menu closed, form empty.
/// Returns a full document including `<!DOCTYPE html>`.
pub fn render_site(content: &SiteContent, options: &RenderOptions) -> String {
    // Signals created by the components belong to this owner and are
    // dropped with it once the string is produced.
    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <SiteDocument
                content=content.clone()
                year=options.year
                stylesheet=options.stylesheet.clone()
            />
        }
        .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Anchor, Venture};
    use pretty_assertions::assert_eq;

    fn render_default() -> String {
        render_site(&SiteContent::default(), &RenderOptions::with_year(2025))
    }

    #[test]
    fn renders_complete_document() {
        let html = render_default();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn initial_render_has_menu_closed() {
        let html = render_default();
        assert!(html.contains(r#"class="menu-toggle""#));
        assert!(!html.contains(r#"class="mobile-menu""#));
        assert!(!html.contains(r#"class="mobile-link""#));
    }

    #[test]
    fn every_anchor_resolves_exactly_once() {
        let html = render_default();
        let report = audit_anchors(&html);
        report.ensure_resolved().expect("anchors resolve");
        assert!(report.unknown_links.is_empty());
        for anchor in Anchor::ALL {
            assert_eq!(report.anchors[anchor.id()].targets, 1, "{}", anchor.id());
            assert!(report.anchors[anchor.id()].links >= 1, "{}", anchor.id());
        }
    }

    #[test]
    fn portfolio_has_one_venture_and_one_placeholder() {
        let html = render_default();
        assert_eq!(html.matches(r#"class="venture-card""#).count(), 1);
        assert_eq!(html.matches(r#"class="venture-placeholder""#).count(), 1);
        assert!(html.contains(r#"data-venture="Signature Seal Notary""#));
        assert!(html.contains(r#"href="https://signaturesealnotaries.com""#));
    }

    #[test]
    fn added_venture_renders_without_markup_changes() {
        let mut content = SiteContent::default();
        content.portfolio.ventures.push(Venture {
            name: "Yard Kitchen".into(),
            category: "Hospitality".into(),
            url: "https://example.com/yard-kitchen".into(),
            ..Default::default()
        });
        let html = render_site(&content, &RenderOptions::with_year(2025));
        assert_eq!(html.matches(r#"class="venture-card""#).count(), 2);
        assert_eq!(html.matches(r#"class="venture-placeholder""#).count(), 1);
    }

    #[test]
    fn contact_values_are_preserved() {
        let html = render_default();
        assert!(html.contains(r#"href="tel:3049824165""#));
        assert!(html.contains(r#"href="mailto:jamdelphiagroup@gmail.com""#));
    }

    #[test]
    fn footer_carries_the_given_year() {
        let html = render_site(&SiteContent::default(), &RenderOptions::with_year(2031));
        assert!(html.contains("© 2031 JamDelphia Group LLC. All rights reserved."));
    }

    #[test]
    fn external_stylesheet_replaces_inline_css() {
        let options = RenderOptions {
            year: 2025,
            stylesheet: Some("/site.css".into()),
        };
        let html = render_site(&SiteContent::default(), &options);
        assert!(html.contains(r#"href="/site.css""#));
        assert!(!html.contains("<style>"));
    }
}
