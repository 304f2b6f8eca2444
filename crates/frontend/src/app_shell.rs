//! Dashboard entry page.
//!
//! Resolves `/dashboard/:role` to a [`Role`], opens a session for it and mounts
//! the dashboard shell. Unknown role segments render a not-found panel.

use crate::layout::DashboardShell;
use crate::system::session::{demo_identity, SessionProvider};
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let params = use_params_map();
    let role = Memo::new(move |_| {
        let code = params.read().get("role").unwrap_or_default();
        code.parse::<Role>()
            .map_err(|err| log::warn!("dashboard route: {}", err))
            .ok()
    });

    move || match role.get() {
        Some(role) => view! {
            <SessionProvider identity=demo_identity(role)>
                <DashboardShell identity=demo_identity(role) />
            </SessionProvider>
        }
        .into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a class="button button--primary" href="/">"Back to home"</a>
        </div>
    }
}
