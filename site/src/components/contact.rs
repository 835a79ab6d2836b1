//! Contact band: direct details on the left, the decorative form on the right.

use leptos::prelude::*;

use super::{Icon, ICON_MAIL, ICON_MAP_PIN, ICON_PHONE};
use crate::state::{ContactField, ContactForm};
use crate::types::{Anchor, Contact as ContactContent, FormCopy};

#[component]
pub fn Contact(content: ContactContent) -> impl IntoView {
    let mailto = content.mailto();
    let tel = content.phone.href();

    view! {
        <section id=Anchor::Contact.id() class="section contact">
            <div class="container">
                <div class="contact-grid">
                    <div>
                        <h2 class="section-heading">{content.heading}</h2>
                        <p class="contact-blurb">{content.blurb}</p>

                        <div class="contact-item">
                            <div class="contact-icon">
                                <Icon path=ICON_PHONE />
                            </div>
                            <div>
                                <p class="contact-label">"Call Us"</p>
                                <a href=tel class="contact-value">{content.phone.display}</a>
                            </div>
                        </div>

                        <div class="contact-item">
                            <div class="contact-icon">
                                <Icon path=ICON_MAIL />
                            </div>
                            <div>
                                <p class="contact-label">"Email Us"</p>
                                <a href=mailto class="contact-value">{content.email}</a>
                            </div>
                        </div>

                        <div class="contact-item">
                            <div class="contact-icon contact-icon-muted">
                                <Icon path=ICON_MAP_PIN />
                            </div>
                            <div>
                                <p class="contact-label">"Based In"</p>
                                <p class="contact-value">{content.region}</p>
                            </div>
                        </div>
                    </div>

                    <ContactFormCard copy=content.form />
                </div>
            </div>
        </section>
    }
}

/// The message form. Field values stay in this card and submission is
/// swallowed: no request, no navigation, no validation.
#[component]
pub fn ContactFormCard(copy: FormCopy) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.with(ContactForm::submit);
    };

    let field_value = move |field: ContactField| form.with(|f| f.get(field).to_string());
    let edit = move |field: ContactField, value: String| form.update(|f| f.set(field, value));

    view! {
        <div class="form-card">
            <h3 class="form-heading">{copy.heading}</h3>
            <form class="contact-form" on:submit=on_submit>
                <div class="form-field">
                    <label class="form-label" for="contact-name">"Name"</label>
                    <input
                        id="contact-name"
                        type="text"
                        class="form-input"
                        placeholder=copy.name_placeholder
                        prop:value=move || field_value(ContactField::Name)
                        on:input=move |ev| edit(ContactField::Name, event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label class="form-label" for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        type="email"
                        class="form-input"
                        placeholder=copy.email_placeholder
                        prop:value=move || field_value(ContactField::Email)
                        on:input=move |ev| edit(ContactField::Email, event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label class="form-label" for="contact-message">"Message"</label>
                    <textarea
                        id="contact-message"
                        rows="4"
                        class="form-input"
                        placeholder=copy.message_placeholder
                        prop:value=move || field_value(ContactField::Message)
                        on:input=move |ev| edit(ContactField::Message, event_target_value(&ev))
                    ></textarea>
                </div>
                <button type="submit" class="form-submit">{copy.submit_label}</button>
            </form>
        </div>
    }
}
