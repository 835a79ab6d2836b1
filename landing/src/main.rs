// JamDelphia Group website - browser build
// Mounts the shared components so the mobile menu and the form respond to input.

use jamdelphia_site::components::App;
use jamdelphia_site::styles::SITE_CSS;
use jamdelphia_site::types::SiteContent;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let year = js_sys::Date::new_0().get_full_year() as i32;
    leptos::mount::mount_to_body(move || {
        view! {
            <style>{SITE_CSS}</style>
            <App content=SiteContent::default() year=year />
        }
    });
}
