//! Content model for the page.
//!
//! Every piece of copy on the page lives in these types. They're designed
//! to be:
//!
//! - **Serializable** - a TOML or JSON file can override any part via serde
//! - **Default-able** - `SiteContent::default()` is the published page, and
//!   every struct is `#[serde(default)]` so partial files work
//! - **Clone-friendly** - components take owned props
//!
//! # Example
//!
//! ```rust
//! use jamdelphia_site::types::{SiteContent, Venture};
//!
//! let mut content = SiteContent::default();
//! content.portfolio.ventures.push(Venture {
//!     name: "Island Grill".into(),
//!     category: "Hospitality".into(),
//!     url: "https://example.com".into(),
//!     ..Default::default()
//! });
//! assert_eq!(content.portfolio.ventures.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// In-page navigation targets.
///
/// Sections take their `id` from here and links take their `href` from
/// here, so a link can only point at a section that exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    #[default]
    About,
    Portfolio,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::About, Anchor::Portfolio, Anchor::Contact];

    /// Element id of the target section
    pub fn id(self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Portfolio => "portfolio",
            Anchor::Contact => "contact",
        }
    }

    /// Fragment link pointing at the section
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Inline icons available to content entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    #[default]
    Globe,
    Anchor,
    Heart,
}

/// Root of all page copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: Brand,
    pub navigation: Navigation,
    pub hero: Hero,
    pub about: About,
    pub portfolio: Portfolio,
    pub contact: Contact,
    pub footer: Footer,
}

impl SiteContent {
    /// `<title>` of the document
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.brand.legal_name, self.hero.badge)
    }
}

/// Brand mark shown in the nav bar and footer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Word mark, e.g. "JamDelphia"
    pub name: String,
    /// Small caps line under the word mark
    pub suffix: String,
    /// Full registered name used in the footer and copyright
    pub legal_name: String,
    /// Two-letter footer badge
    pub monogram: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "JamDelphia".into(),
            suffix: "Group LLC".into(),
            legal_name: "JamDelphia Group LLC".into(),
            monogram: "JD".into(),
        }
    }
}

/// A link in the navigation bar (desktop row and mobile list).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub label: String,
    pub target: Anchor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Navigation {
    pub links: Vec<NavLink>,
    /// Label of the desktop `mailto:` button
    pub cta_label: String,
    /// Accessible label of the mobile menu button
    pub toggle_label: String,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            links: vec![
                NavLink {
                    label: "Our Roots".into(),
                    target: Anchor::About,
                },
                NavLink {
                    label: "Ventures".into(),
                    target: Anchor::Portfolio,
                },
                NavLink {
                    label: "Contact".into(),
                    target: Anchor::Contact,
                },
            ],
            cta_label: "Get in Touch".into(),
            toggle_label: "Toggle navigation menu".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub label: String,
    pub target: Anchor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    /// Second headline line, rendered in the accent color
    pub headline_accent: String,
    pub lede: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            badge: "Building Legacy & Community".into(),
            headline: "Rooted in Heritage.".into(),
            headline_accent: "Focused on the Future.".into(),
            lede: "JamDelphia Group is a holding company founded on the principles of integrity \
                   and service. Bridging the vibrant spirit of Jamaica with the historic strength \
                   of Philadelphia."
                .into(),
            primary_cta: CallToAction {
                label: "View Our Companies".into(),
                target: Anchor::Portfolio,
            },
            secondary_cta: CallToAction {
                label: "Read Our Story".into(),
                target: Anchor::About,
            },
        }
    }
}

/// One root of the company name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    pub name: String,
    pub blurb: String,
    pub icon: IconKind,
}

/// Mission card in the about section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mission {
    pub heading: String,
    pub statement: String,
    pub signatories: String,
    pub role: String,
}

impl Default for Mission {
    fn default() -> Self {
        Self {
            heading: "Our Mission".into(),
            statement: "\"To create sustainable businesses that serve our community with the \
                        warmth of the islands and the strength of the city.\""
                .into(),
            signatories: "Dain & Demetria Russell".into(),
            role: "Founders".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub heading: String,
    /// Emphasized names in the opening sentence
    pub founders: String,
    /// Rest of the opening sentence after the founders' names
    pub founding_note: String,
    /// Lead-in for the origins list, after the quoted brand name
    pub name_note: String,
    pub origins: Vec<Origin>,
    pub closing: String,
    pub mission: Mission,
}

impl Default for About {
    fn default() -> Self {
        Self {
            heading: "The JamDelphia Story".into(),
            founders: "Dain and Demetria Russell".into(),
            founding_note: "JamDelphia Group LLC represents more than just a business \
                            entity—it is a convergence of cultures, histories, and shared values."
                .into(),
            name_note: "is a heartfelt homage to our origins:".into(),
            origins: vec![
                Origin {
                    name: "Jamaica".into(),
                    blurb: "The island roots that provide our resilience, warmth, and vibrant \
                            perspective."
                        .into(),
                    icon: IconKind::Globe,
                },
                Origin {
                    name: "Philadelphia".into(),
                    blurb: "The city of brotherly love, history, and the grit that drives our \
                            work ethic."
                        .into(),
                    icon: IconKind::Anchor,
                },
            ],
            closing: "Together, we are building a portfolio of companies that reflect the best \
                      of both worlds—authentic service and professional excellence."
                .into(),
            mission: Mission::default(),
        }
    }
}

/// An affiliated company listed in the portfolio.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venture {
    pub name: String,
    pub category: String,
    pub description: String,
    /// External site, opened in a new tab
    pub url: String,
    /// Short glyph shown in the card badge
    pub emblem: String,
}

/// The dashed "coming soon" card after the ventures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholder {
    pub title: String,
    pub note: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            title: "Future Ventures".into(),
            note: "Expanding our horizon soon.".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub heading: String,
    pub subheading: String,
    /// Rendered in order, one card each
    pub ventures: Vec<Venture>,
    /// Whether the "Future Ventures" card follows the ventures
    pub show_placeholder: bool,
    pub placeholder: Placeholder,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            heading: "Our Companies".into(),
            subheading: "The current portfolio of JamDelphia Group LLC.".into(),
            ventures: vec![Venture {
                name: "Signature Seal Notary".into(),
                category: "Professional Services".into(),
                description: "Provides reliable, verified mobile notary and signing services. \
                              Ensuring your documents are handled with precision and care."
                    .into(),
                url: "https://signaturesealnotaries.com".into(),
                emblem: "✒️".into(),
            }],
            show_placeholder: true,
            placeholder: Placeholder::default(),
        }
    }
}

/// A phone number as shown and as dialed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phone {
    pub display: String,
    /// Digits only, used in the `tel:` link
    pub dial: String,
}

impl Phone {
    pub fn href(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self {
            display: "(304) 982-4165".into(),
            dial: "3049824165".into(),
        }
    }
}

/// Copy of the decorative contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormCopy {
    pub heading: String,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub message_placeholder: String,
    pub submit_label: String,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            heading: "Send a Message".into(),
            name_placeholder: "Your Name".into(),
            email_placeholder: "you@example.com".into(),
            message_placeholder: "How can we help?".into(),
            submit_label: "Send Message".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub phone: Phone,
    pub email: String,
    pub region: String,
    pub form: FormCopy,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            heading: "Let's Connect".into(),
            blurb: "Whether you are looking for notary services or interested in partnership \
                    opportunities, we are here to help."
                .into(),
            phone: Phone::default(),
            email: "jamdelphiagroup@gmail.com".into(),
            region: "West Virginia / Pennsylvania Region".into(),
            form: FormCopy::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Line under the copyright
    pub credit: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            credit: "Dain Russell • Founder & Managing Member".into(),
        }
    }
}
