use contracts::shared::site::GYM_NAME;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <span>{format!("(c) {year} {GYM_NAME}")}</span>
        </footer>
    }
}
