use crate::app_shell::{DashboardPage, NotFound};
use crate::site::LandingPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/dashboard/:role") view=DashboardPage />
            </Routes>
        </Router>
    }
}
