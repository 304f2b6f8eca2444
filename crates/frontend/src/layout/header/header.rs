//! DashboardHeader - top bar of the dashboard.
//!
//! Contains:
//! - Sidebar collapse toggle
//! - Title of the active tab and today's date
//! - User name, email and avatar (initials when no image is set)

use crate::shared::icons::icon;
use contracts::system::auth::Identity;
use leptos::prelude::*;

fn today_label() -> String {
    String::from(js_sys::Date::new_0().to_date_string())
}

#[component]
pub fn DashboardHeader(
    identity: Identity,
    /// Label of the active tab
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    sidebar_open: Signal<bool>,
    on_toggle_sidebar: Callback<()>,
) -> impl IntoView {
    let initials = identity.initials();
    let avatar = match identity.user_avatar.clone() {
        Some(src) => view! {
            <img class="dashboard-header__avatar" src=src alt=identity.user_name.clone() />
        }
        .into_any(),
        None => view! {
            <span class="dashboard-header__avatar dashboard-header__avatar--initials">{initials}</span>
        }
        .into_any(),
    };

    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__left">
                <button
                    class="dashboard-header__icon-btn"
                    on:click=move |_| on_toggle_sidebar.run(())
                    title=move || if sidebar_open.get() { "Collapse navigation" } else { "Expand navigation" }
                >
                    {move || if sidebar_open.get() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <div class="dashboard-header__title">
                    <h1>{move || title.get()}</h1>
                    <span class="dashboard-header__date">{today_label()}</span>
                </div>
            </div>

            <div class="dashboard-header__user">
                <div class="dashboard-header__user-text">
                    <span class="dashboard-header__user-name">{identity.user_name.clone()}</span>
                    <span class="dashboard-header__user-email">{identity.user_email.clone()}</span>
                </div>
                {avatar}
            </div>
        </header>
    }
}
