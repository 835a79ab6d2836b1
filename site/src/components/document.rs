//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::App;
use crate::styles::SITE_CSS;
use crate::types::SiteContent;

/// The complete HTML document: head metadata, stylesheet, and the page.
#[component]
pub fn SiteDocument(
    content: SiteContent,
    year: i32,
    /// External stylesheet href; the CSS is inlined when `None`
    stylesheet: Option<String>,
) -> impl IntoView {
    let title = content.page_title();
    let description = content.hero.lede.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                {match stylesheet {
                    Some(href) => view! { <link rel="stylesheet" href=href /> }.into_any(),
                    None => view! { <style>{SITE_CSS}</style> }.into_any(),
                }}
            </head>
            <body>
                <App content=content year=year />
            </body>
        </html>
    }
}
