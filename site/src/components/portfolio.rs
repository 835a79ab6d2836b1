//! Portfolio grid: one card per venture, then the optional placeholder.

use leptos::prelude::*;

use super::{Icon, ICON_EXTERNAL_LINK};
use crate::types::{Anchor, Placeholder, Portfolio as PortfolioContent, Venture};

#[component]
pub fn Portfolio(content: PortfolioContent) -> impl IntoView {
    view! {
        <section id=Anchor::Portfolio.id() class="section portfolio">
            <div class="container">
                <div class="portfolio-header">
                    <h2 class="section-heading">{content.heading}</h2>
                    <p class="portfolio-subheading">{content.subheading}</p>
                </div>

                <div class="venture-grid">
                    {content.ventures.into_iter().map(|venture| {
                        view! { <VentureCard venture=venture /> }
                    }).collect::<Vec<_>>()}
                    {content.show_placeholder.then(|| {
                        view! { <PlaceholderCard placeholder=content.placeholder /> }
                    })}
                </div>
            </div>
        </section>
    }
}

/// A populated venture card linking out to the venture's site.
#[component]
pub fn VentureCard(venture: Venture) -> impl IntoView {
    let key = venture.name.clone();
    view! {
        <div class="venture-card" data-venture=key>
            <div class="venture-stripe"></div>
            <div class="venture-body">
                <div class="venture-emblem">{venture.emblem}</div>
                <h3 class="venture-name">{venture.name}</h3>
                <p class="venture-category">{venture.category}</p>
                <p class="venture-description">{venture.description}</p>
                <a
                    href=venture.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="venture-link"
                >
                    "Visit Website"
                    <Icon path=ICON_EXTERNAL_LINK size="16" />
                </a>
            </div>
        </div>
    }
}

#[component]
fn PlaceholderCard(placeholder: Placeholder) -> impl IntoView {
    view! {
        <div class="venture-placeholder">
            <div class="placeholder-plus">"+"</div>
            <h3 class="placeholder-title">{placeholder.title}</h3>
            <p class="placeholder-note">{placeholder.note}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(content: PortfolioContent) -> String {
        view! { <Portfolio content=content /> }.to_html()
    }

    #[test]
    fn renders_one_card_per_venture_in_order() {
        let mut content = PortfolioContent::default();
        content.ventures.push(Venture {
            name: "Yard Kitchen".into(),
            url: "https://example.com/yard".into(),
            ..Default::default()
        });

        let html = render(content);
        assert_eq!(html.matches(r#"class="venture-card""#).count(), 2);
        let first = html.find("Signature Seal Notary").expect("first venture");
        let second = html.find("Yard Kitchen").expect("second venture");
        assert!(first < second);
        assert!(html.contains(r#"href="https://example.com/yard""#));
    }

    #[test]
    fn placeholder_is_optional() {
        let content = PortfolioContent {
            show_placeholder: false,
            ..Default::default()
        };
        let html = render(content);
        assert!(!html.contains(r#"class="venture-placeholder""#));
        assert_eq!(html.matches(r#"class="venture-card""#).count(), 1);
    }

    #[test]
    fn card_is_keyed_by_venture_name() {
        let content = PortfolioContent {
            ventures: vec![Venture {
                name: "Blue Mountain Realty".into(),
                url: "https://example.com/realty".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render(content);
        assert!(html.contains(r#"data-venture="Blue Mountain Realty""#));
        assert!(html.contains(r#"<h3 class="venture-name">Blue Mountain Realty</h3>"#));
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let html = render(PortfolioContent::default());
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }
}
