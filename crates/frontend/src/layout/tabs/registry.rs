//! Tab content registry - maps a menu item id to its content region.
//!
//! Ids shared by both menus (e.g. `dashboard`) render the same region with
//! role-specific data.

use crate::dashboards::{BookingsList, CustomersList, Overview, RegionPlaceholder};
use contracts::shared::navigation::MenuDefinition;
use contracts::system::auth::Identity;
use leptos::prelude::*;

/// Renders the content region for `key`.
///
/// Unknown keys get a placeholder rather than an error.
pub fn render_tab_content(key: &str, identity: &Identity) -> AnyView {
    let role = identity.role;
    match key {
        "dashboard" => view! { <Overview identity=identity.clone() /> }.into_any(),
        "bookings" | "schedule" => view! { <BookingsList role=role /> }.into_any(),
        "customers" | "clients" => view! { <CustomersList role=role /> }.into_any(),
        _ => {
            let label = MenuDefinition::for_role(role).label_for(key).to_string();
            view! { <RegionPlaceholder title=label /> }.into_any()
        }
    }
}
