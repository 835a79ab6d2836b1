use leptos::prelude::*;

use super::{Icon, ICON_ARROW_RIGHT};
use crate::types::Hero as HeroContent;

#[component]
pub fn Hero(content: HeroContent) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {content.badge}
                    </div>
                    <h1 class="hero-title">
                        {content.headline}
                        <br />
                        <span class="hero-title-accent">{content.headline_accent}</span>
                    </h1>
                    <p class="hero-description">{content.lede}</p>
                    <div class="hero-actions">
                        <a href=content.primary_cta.target.href() class="btn btn-primary">
                            {content.primary_cta.label}
                            <Icon path=ICON_ARROW_RIGHT />
                        </a>
                        <a href=content.secondary_cta.target.href() class="btn btn-secondary">
                            {content.secondary_cta.label}
                        </a>
                    </div>
                </div>
            </div>

            // Decorative background glows
            <div class="hero-glow hero-glow-gold"></div>
            <div class="hero-glow hero-glow-navy"></div>
        </section>
    }
}
