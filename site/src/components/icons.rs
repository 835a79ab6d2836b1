//! Inline stroke icons.
//!
//! Path data follows the 24x24 outline set the page was designed with, so
//! the icons inherit `currentColor` and need no external assets.

use leptos::prelude::*;

use crate::types::IconKind;

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MAIL size="20" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="icon"
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

impl IconKind {
    pub fn path(self) -> &'static str {
        match self {
            IconKind::Globe => ICON_GLOBE,
            IconKind::Anchor => ICON_ANCHOR,
            IconKind::Heart => ICON_HEART,
        }
    }
}

/// Hamburger (menu closed)
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

/// Close cross (menu open)
pub const ICON_X: &str = "M18 6 6 18M6 6l12 12";

pub const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";

/// Box with outgoing arrow (external site)
pub const ICON_EXTERNAL_LINK: &str =
    "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6";

pub const ICON_MAIL: &str =
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6";

pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

pub const ICON_MAP_PIN: &str =
    "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z";

pub const ICON_GLOBE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";

pub const ICON_ANCHOR: &str = "M12 8a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM12 22V8M5 12H2a10 10 0 0 0 20 0h-3";

pub const ICON_HEART: &str = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z";
