use crate::shared::icons::icon;
use contracts::shared::site::GYM_NAME;
use leptos::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#coaches", "Coaches"),
    ("#plans", "Plans"),
    ("#visit", "Visit"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let close_menu = move |_: leptos::ev::MouseEvent| menu_open.set(false);

    view! {
        <header class="site-nav">
            <a class="site-nav__brand" href="#top">
                {icon("dumbbell")}
                <span>{GYM_NAME}</span>
            </a>
            <button
                class="site-nav__toggle"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { icon("x") } else { icon("menu") }}
            </button>
            <nav class="site-nav__links" class:site-nav__links--open=move || menu_open.get()>
                {SECTIONS.iter().map(|(href, label)| view! {
                    <a href=*href on:click=close_menu>{*label}</a>
                }).collect_view()}
                // Links handled by the client-side router
                <a class="button button--secondary button--small" href="/dashboard/pt">
                    "Trainer login"
                </a>
                <a class="button button--primary button--small" href="/dashboard/admin">
                    "Staff login"
                </a>
            </nav>
        </header>
    }
}
