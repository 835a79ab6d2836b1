use leptos::prelude::*;

use super::{About, Contact, Footer, Hero, Navigation, Portfolio};
use crate::state::MenuVisibility;
use crate::types::SiteContent;

/// Root of the page. Owns the menu flag and composes the six sections.
#[component]
pub fn App(content: SiteContent, year: i32) -> impl IntoView {
    let (menu, set_menu) = signal(MenuVisibility::default());

    let SiteContent {
        brand,
        navigation,
        hero,
        about,
        portfolio,
        contact,
        footer,
    } = content;
    let email = contact.email.clone();
    let brand_name = brand.name.clone();

    view! {
        <div class="site">
            <Navigation
                brand=brand.clone()
                content=navigation
                email=email
                menu=menu
                set_menu=set_menu
            />
            <main>
                <Hero content=hero />
                <About content=about brand_name=brand_name />
                <Portfolio content=portfolio />
                <Contact content=contact />
            </main>
            <Footer brand=brand content=footer year=year />
        </div>
    }
}
