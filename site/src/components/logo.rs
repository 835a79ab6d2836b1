use leptos::prelude::*;

use crate::types::Brand;

/// JD monogram with the word mark beside it.
#[component]
pub fn Logo(brand: Brand) -> impl IntoView {
    view! {
        <div class="logo">
            <div class="logo-mark">
                <svg viewBox="0 0 100 100" class="logo-glyph" stroke-width="6" aria-hidden="true">
                    // J
                    <path d="M 40 20 V 70 A 15 15 0 0 1 10 70" stroke-linecap="round"></path>
                    // D
                    <path d="M 50 20 H 70 A 25 25 0 0 1 70 80 H 50 V 20" stroke-linecap="round"></path>
                </svg>
            </div>
            <div class="logo-text">
                <span class="logo-name">{brand.name}</span>
                <span class="logo-suffix">{brand.suffix}</span>
            </div>
        </div>
    }
}
