//! CSS for the page.
//!
//! One stylesheet shared by the static render and the browser build.
//! The static render inlines it unless a stylesheet href is passed in
//! [`RenderOptions`](crate::RenderOptions).
//!
//! # Palette
//!
//! - navy `#2d3e50` (primary, contact band)
//! - gold `#c4a059` (accent)
//! - ink `#1e2a36` (footer)

/// Complete CSS for the page.
///
/// Desktop navigation links collapse into the menu button below 768px.
pub const SITE_CSS: &str = r#"
:root {
    --navy: #2d3e50;
    --gold: #c4a059;
    --gold-dark: #a38344;
    --ink: #1e2a36;
    --slate-50: #f8fafc;
    --slate-100: #f1f5f9;
    --slate-300: #cbd5e1;
    --slate-400: #94a3b8;
    --slate-700: #334155;
    --gray-100: #f3f4f6;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-900: #111827;
    --container-max: 1280px;
    --font-sans: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    background: #fff;
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

.icon {
    display: inline-block;
    vertical-align: middle;
    flex-shrink: 0;
}

/* ---------- navigation ---------- */

.nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--gray-100);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 5rem;
}

.logo {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.logo-mark {
    width: 3rem;
    height: 3rem;
    background: var(--navy);
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 2px;
}

.logo-glyph {
    width: 2rem;
    height: 2rem;
    fill: none;
    stroke: var(--gold);
}

.logo-text {
    display: flex;
    flex-direction: column;
}

.logo-name {
    font-size: 1.25rem;
    font-weight: 700;
    line-height: 1.2;
    color: var(--navy);
    letter-spacing: -0.01em;
}

.logo-suffix {
    font-size: 0.875rem;
    font-weight: 500;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    color: var(--gray-500);
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-link {
    color: var(--gray-600);
    font-weight: 500;
    transition: color 0.15s;
}

.nav-link:hover {
    color: var(--gold);
}

.nav-cta {
    padding: 0.5rem 1.25rem;
    border-radius: 9999px;
    background: var(--navy);
    color: #fff;
    font-weight: 500;
    transition: transform 0.15s;
}

.nav-cta:hover {
    transform: scale(1.05);
}

.menu-toggle {
    display: none;
    padding: 0.5rem;
    background: none;
    border: 0;
    color: var(--gray-900);
    cursor: pointer;
}

.mobile-menu {
    position: absolute;
    width: 100%;
    background: #fff;
    border-top: 1px solid var(--gray-100);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    padding: 0.5rem 1rem 1.5rem;
}

.mobile-link {
    display: block;
    padding: 0.75rem;
    border-radius: 0.375rem;
    font-weight: 500;
    color: var(--gray-700);
}

.mobile-link:hover {
    background: var(--slate-50);
}

/* ---------- hero ---------- */

.hero {
    position: relative;
    overflow: hidden;
    background: linear-gradient(to bottom right, var(--slate-50), var(--slate-100));
    padding: 8rem 0 10rem;
}

.hero-content {
    position: relative;
    z-index: 10;
    max-width: 48rem;
    margin: 0 auto;
    text-align: center;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: #eff6ff;
    border: 1px solid #dbeafe;
    color: var(--navy);
    font-size: 0.875rem;
    font-weight: 600;
    margin-bottom: 1.5rem;
}

.hero-badge-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: var(--gold);
}

.hero-title {
    font-size: 3.75rem;
    font-weight: 700;
    letter-spacing: -0.02em;
    color: var(--navy);
    margin: 0 0 1.5rem;
}

.hero-title-accent {
    color: var(--gold);
}

.hero-description {
    font-size: 1.25rem;
    line-height: 1.7;
    color: var(--gray-600);
    margin: 0 0 2.5rem;
}

.hero-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.75rem 2rem;
    border-radius: 0.5rem;
    font-weight: 500;
    transition: all 0.15s;
}

.btn-primary {
    background: var(--navy);
    color: #fff;
    box-shadow: 0 10px 15px rgba(45, 62, 80, 0.25);
}

.btn-secondary {
    background: #fff;
    color: var(--navy);
    border: 1px solid var(--gray-200);
}

.btn-secondary:hover {
    background: var(--slate-50);
}

.hero-glow {
    position: absolute;
    border-radius: 9999px;
    filter: blur(64px);
}

.hero-glow-gold {
    top: 0;
    left: 0;
    width: 24rem;
    height: 24rem;
    transform: translate(-50%, -50%);
    background: var(--gold);
    opacity: 0.1;
}

.hero-glow-navy {
    bottom: 0;
    right: 0;
    width: 30rem;
    height: 30rem;
    transform: translate(50%, 50%);
    background: var(--navy);
    opacity: 0.05;
}

/* ---------- sections ---------- */

.section {
    padding: 5rem 0;
}

.section-heading {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--navy);
    margin: 0 0 1.5rem;
}

.section-rule {
    width: 5rem;
    height: 0.25rem;
    background: var(--gold);
    margin-bottom: 2rem;
}

/* ---------- about ---------- */

.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}

.about-story {
    color: var(--gray-600);
    font-size: 1.125rem;
    line-height: 1.7;
}

.about-story strong {
    color: var(--gray-900);
}

.origins {
    list-style: none;
    padding: 0;
    margin: 1rem 0;
}

.origin {
    display: flex;
    align-items: flex-start;
    margin-bottom: 1rem;
}

.origin-icon {
    padding: 0.5rem;
    border-radius: 0.5rem;
    background: rgba(45, 62, 80, 0.1);
    color: var(--navy);
    margin-right: 1rem;
    margin-top: 0.25rem;
}

.origin-name {
    font-weight: 700;
    color: var(--gray-900);
    margin: 0;
}

.origin-blurb {
    font-size: 0.875rem;
    margin: 0;
}

.about-closing {
    padding-top: 1rem;
    border-top: 1px solid var(--gray-100);
}

.mission-card {
    position: relative;
    z-index: 10;
    background: var(--slate-50);
    border: 1px solid var(--gray-100);
    border-radius: 1rem;
    padding: 3rem;
    text-align: center;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    color: var(--gold);
}

.mission-heading {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--gray-900);
    margin: 1.5rem 0 0.5rem;
}

.mission-statement {
    color: var(--gray-600);
    font-style: italic;
}

.mission-signature {
    margin-top: 2rem;
    padding-top: 2rem;
    border-top: 1px solid var(--gray-200);
}

.mission-signatories {
    font-weight: 600;
    color: var(--gray-900);
}

.mission-role {
    font-size: 0.875rem;
    color: var(--gray-500);
}

/* ---------- portfolio ---------- */

.portfolio {
    background: var(--slate-50);
}

.portfolio-header {
    text-align: center;
    margin-bottom: 4rem;
}

.portfolio-subheading {
    margin-top: 1rem;
    font-size: 1.25rem;
    color: var(--gray-500);
}

.venture-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.venture-card {
    display: flex;
    flex-direction: column;
    background: #fff;
    border: 1px solid var(--gray-100);
    border-radius: 0.75rem;
    overflow: hidden;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 0.3s;
}

.venture-card:hover {
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}

.venture-stripe {
    height: 0.5rem;
    background: var(--gold);
}

.venture-body {
    flex: 1;
    display: flex;
    flex-direction: column;
    padding: 2rem;
}

.venture-emblem {
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    background: #eff6ff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    margin-bottom: 1rem;
}

.venture-name {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--gray-900);
    margin: 0;
}

.venture-card:hover .venture-name {
    color: var(--gold);
}

.venture-category {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--gray-400);
    margin: 0.25rem 0 1.5rem;
}

.venture-description {
    flex: 1;
    color: var(--gray-600);
    margin: 0 0 2rem;
}

.venture-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
    color: var(--gold);
}

.venture-link:hover {
    color: var(--gold-dark);
}

.venture-placeholder {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 2rem;
    background: var(--slate-100);
    border: 2px dashed var(--gray-300);
    border-radius: 0.75rem;
    opacity: 0.7;
}

.placeholder-plus {
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    background: var(--gray-200);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    color: var(--gray-400);
    margin-bottom: 1rem;
}

.placeholder-title {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--gray-500);
    margin: 0;
}

.placeholder-note {
    font-size: 0.875rem;
    color: var(--gray-400);
    margin-top: 0.5rem;
}

/* ---------- contact ---------- */

.contact {
    background: var(--navy);
    color: #fff;
}

.contact-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
}

.contact-blurb {
    color: var(--slate-300);
    font-size: 1.125rem;
    max-width: 28rem;
    margin-bottom: 2rem;
}

.contact-item {
    display: flex;
    align-items: center;
    margin-bottom: 1.5rem;
}

.contact-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    background: var(--gold);
    display: flex;
    align-items: center;
    justify-content: center;
    margin-right: 1rem;
    transition: transform 0.15s;
}

.contact-item:hover .contact-icon {
    transform: scale(1.1);
}

.contact-icon-muted {
    background: var(--slate-700);
    color: var(--slate-300);
}

.contact-label {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--slate-300);
    margin: 0;
}

.contact-value {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0;
}

a.contact-value:hover {
    color: var(--gold);
}

.form-card {
    background: #fff;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.form-heading {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--navy);
    margin: 0 0 1.5rem;
}

.form-field {
    margin-bottom: 1rem;
}

.form-label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--gray-700);
    margin-bottom: 0.25rem;
}

.form-input {
    width: 100%;
    padding: 0.5rem 1rem;
    border: 1px solid var(--gray-300);
    border-radius: 0.5rem;
    color: var(--gray-900);
    font: inherit;
    outline: none;
}

.form-input:focus {
    border-color: transparent;
    box-shadow: 0 0 0 2px var(--gold);
}

.form-submit {
    width: 100%;
    padding: 0.75rem;
    border: 0;
    border-radius: 0.5rem;
    background: var(--gold);
    color: #fff;
    font: inherit;
    font-weight: 700;
    cursor: pointer;
}

.form-submit:hover {
    opacity: 0.9;
}

/* ---------- footer ---------- */

.footer {
    background: var(--ink);
    color: var(--slate-400);
    padding: 3rem 0;
    border-top: 1px solid var(--slate-700);
}

.footer-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1.5rem;
}

.footer-brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.footer-monogram {
    width: 2rem;
    height: 2rem;
    background: var(--slate-700);
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 2px;
    color: var(--gold);
    font-weight: 700;
    font-size: 0.75rem;
}

.footer-name {
    color: #fff;
    font-weight: 500;
}

.footer-legal {
    font-size: 0.875rem;
    text-align: right;
}

.footer-legal p {
    margin: 0 0 0.25rem;
}

/* ---------- responsive ---------- */

@media (max-width: 1024px) {
    .about-grid,
    .contact-grid {
        grid-template-columns: 1fr;
    }

    .venture-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (max-width: 768px) {
    .nav-links {
        display: none;
    }

    .menu-toggle {
        display: inline-flex;
    }

    .hero {
        padding: 4rem 0 6rem;
    }

    .hero-title {
        font-size: 2.25rem;
    }

    .hero-actions,
    .footer-inner {
        flex-direction: column;
    }

    .footer-legal {
        text-align: center;
    }

    .venture-grid {
        grid-template-columns: 1fr;
    }
}

@media (min-width: 769px) {
    .mobile-menu {
        display: none;
    }
}
"#;
