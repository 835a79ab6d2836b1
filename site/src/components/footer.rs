use leptos::prelude::*;

use crate::types::{Brand, Footer as FooterContent};

#[component]
pub fn Footer(brand: Brand, content: FooterContent, year: i32) -> impl IntoView {
    let copyright = format!("© {year} {}. All rights reserved.", brand.legal_name);

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <div class="footer-monogram">{brand.monogram}</div>
                        <span class="footer-name">{brand.legal_name}</span>
                    </div>
                    <div class="footer-legal">
                        <p>{copyright}</p>
                        <p>{content.credit}</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
