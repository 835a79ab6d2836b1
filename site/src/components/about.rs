use leptos::prelude::*;

use super::{Icon, ICON_HEART};
use crate::types::{About as AboutContent, Anchor, Mission};

/// Founder narrative with the two origins and the mission card.
#[component]
pub fn About(
    content: AboutContent,
    /// Brand word mark, quoted in the naming paragraph
    brand_name: String,
) -> impl IntoView {
    let quoted_name = format!("\"{brand_name}\"");

    view! {
        <section id=Anchor::About.id() class="section about">
            <div class="container">
                <div class="about-grid">
                    <div>
                        <h2 class="section-heading">{content.heading}</h2>
                        <div class="section-rule"></div>

                        <div class="about-story">
                            <p>
                                "Founded by "
                                <strong>{content.founders}</strong>
                                ", "
                                {content.founding_note}
                            </p>
                            <p>
                                "The name "
                                <strong>{quoted_name}</strong>
                                " "
                                {content.name_note}
                            </p>
                            <ul class="origins">
                                {content.origins.into_iter().map(|origin| {
                                    view! {
                                        <li class="origin">
                                            <div class="origin-icon">
                                                <Icon path=origin.icon.path() />
                                            </div>
                                            <div>
                                                <h4 class="origin-name">{origin.name}</h4>
                                                <p class="origin-blurb">{origin.blurb}</p>
                                            </div>
                                        </li>
                                    }
                                }).collect::<Vec<_>>()}
                            </ul>
                            <p class="about-closing">{content.closing}</p>
                        </div>
                    </div>

                    <MissionCard mission=content.mission />
                </div>
            </div>
        </section>
    }
}

#[component]
fn MissionCard(mission: Mission) -> impl IntoView {
    view! {
        <div class="mission-card">
            <Icon path=ICON_HEART size="48" />
            <h3 class="mission-heading">{mission.heading}</h3>
            <p class="mission-statement">{mission.statement}</p>
            <div class="mission-signature">
                <div class="mission-signatories">{mission.signatories}</div>
                <div class="mission-role">{mission.role}</div>
            </div>
        </div>
    }
}
