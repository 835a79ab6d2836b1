//! Leptos UI components for the page.
//!
//! The same components back the static render ([`crate::render_site`]) and
//! the browser build in `landing/`.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (static render only: <html>, <head>, CSS)
//! └── App (owns MenuVisibility)
//!     ├── Navigation (reads + writes MenuVisibility)
//!     │   ├── Logo
//!     │   └── MobileMenu (only while open)
//!     ├── Hero
//!     ├── About
//!     │   └── MissionCard
//!     ├── Portfolio
//!     │   ├── VentureCard (per venture)
//!     │   └── PlaceholderCard
//!     ├── Contact
//!     │   └── ContactFormCard (owns ContactForm)
//!     └── Footer
//! ```

mod about;
mod app;
mod contact;
mod document;
mod footer;
mod hero;
mod icons;
mod logo;
mod nav;
mod portfolio;

pub use about::About;
pub use app::App;
pub use contact::{Contact, ContactFormCard};
pub use document::SiteDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use logo::Logo;
pub use nav::Navigation;
pub use portfolio::{Portfolio, VentureCard};
