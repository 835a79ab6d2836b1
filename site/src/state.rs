//! UI state owned by the page.
//!
//! The page has exactly two pieces of mutable state:
//!
//! - [`MenuVisibility`] - owned by the root [`App`](crate::components::App)
//!   and handed down to the navigation bar together with its setter.
//! - [`ContactForm`] - local to the contact card, never shared.
//!
//! Both are plain values so they can be exercised without a reactive
//! runtime; the components wrap them in Leptos signals.

use serde::{Deserialize, Serialize};

/// Whether the mobile navigation list is rendered.
///
/// Transitions: `Closed --toggle--> Open --(toggle | link select)--> Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuVisibility {
    /// Mobile list hidden (initial state at mount)
    #[default]
    Closed,
    /// Mobile list shown below the bar
    Open,
}

impl MenuVisibility {
    /// Flip the flag (menu button).
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Force the menu shut (a mobile link was selected).
    #[must_use]
    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// One editable field of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// What happened to a form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was swallowed: nothing sent, nothing validated.
    Discarded,
}

/// Form-local values of the contact card.
///
/// The form is decorative: [`ContactForm::submit`] never sends anything
/// anywhere and leaves the typed values in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Handle a submit event. Always [`SubmitOutcome::Discarded`].
    pub fn submit(&self) -> SubmitOutcome {
        tracing::debug!(
            name_len = self.name.len(),
            email_len = self.email.len(),
            message_len = self.message.len(),
            "contact form submission discarded"
        );
        SubmitOutcome::Discarded
    }
}
