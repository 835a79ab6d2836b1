//! Sticky navigation bar with the collapsible mobile menu.

use leptos::prelude::*;

use super::{Icon, Logo, ICON_MENU, ICON_X};
use crate::state::MenuVisibility;
use crate::types::{Brand, NavLink, Navigation as NavigationContent};

/// Top bar: brand, desktop links, `mailto:` button, and the mobile menu.
///
/// The menu flag belongs to the caller; this component only reads it and
/// writes it through `set_menu`.
#[component]
pub fn Navigation(
    brand: Brand,
    content: NavigationContent,
    /// Contact address used by the call-to-action button
    email: String,
    menu: ReadSignal<MenuVisibility>,
    set_menu: WriteSignal<MenuVisibility>,
) -> impl IntoView {
    let mobile_links = content.links.clone();
    let toggle_label = content.toggle_label.clone();

    view! {
        <nav class="nav">
            <div class="container">
                <div class="nav-inner">
                    <Logo brand=brand />

                    <div class="nav-links">
                        {content.links.into_iter().map(|link| {
                            view! {
                                <a href=link.target.href() class="nav-link">{link.label}</a>
                            }
                        }).collect::<Vec<_>>()}
                        <a href=format!("mailto:{email}") class="nav-cta">
                            {content.cta_label}
                        </a>
                    </div>

                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label=toggle_label
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| set_menu.update(|m| *m = m.toggle())
                    >
                        {move || if menu.get().is_open() {
                            view! { <Icon path=ICON_X size="24" /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_MENU size="24" /> }.into_any()
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <MobileMenu links=mobile_links.clone() set_menu=set_menu />
            </Show>
        </nav>
    }
}

/// Vertical link list shown while the menu is open.
#[component]
fn MobileMenu(links: Vec<NavLink>, set_menu: WriteSignal<MenuVisibility>) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            {links.into_iter().map(|link| {
                // the browser still performs the anchor jump
                view! {
                    <a
                        href=link.target.href()
                        class="mobile-link"
                        on:click=move |_| set_menu.update(|m| *m = m.close())
                    >
                        {link.label}
                    </a>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SiteContent;
    use leptos::tachys::view::RenderHtml;

    fn render_nav(initial: MenuVisibility) -> String {
        Owner::new().with(|| {
            let content = SiteContent::default();
            let (menu, set_menu) = signal(initial);
            view! {
                <Navigation
                    brand=content.brand
                    content=content.navigation
                    email=content.contact.email
                    menu=menu
                    set_menu=set_menu
                />
            }
            .to_html()
        })
    }

    #[test]
    fn closed_menu_renders_no_mobile_list() {
        let html = render_nav(MenuVisibility::Closed);
        assert!(!html.contains(r#"class="mobile-menu""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert_eq!(html.matches(r#"class="nav-link""#).count(), 3);
    }

    #[test]
    fn open_menu_renders_one_mobile_link_per_nav_link() {
        let html = render_nav(MenuVisibility::Open);
        assert!(html.contains(r#"class="mobile-menu""#));
        assert_eq!(html.matches(r#"class="mobile-link""#).count(), 3);
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn cta_mails_the_contact_address() {
        let html = render_nav(MenuVisibility::Closed);
        assert!(html.contains(r#"href="mailto:jamdelphiagroup@gmail.com""#));
        assert!(html.contains("Get in Touch"));
    }
}
