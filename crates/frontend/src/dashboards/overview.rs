use super::demo_data::{overview_stats, overview_target};
use crate::shared::components::{SalesChart, StatCard, WelcomeCard};
use contracts::system::auth::Identity;
use leptos::prelude::*;

/// Landing region of both dashboards.
#[component]
pub fn Overview(identity: Identity) -> impl IntoView {
    let role = identity.role;
    let (target, target_title) = overview_target(role);

    view! {
        <div class="overview">
            <WelcomeCard role=role user_name=identity.user_name.clone() />
            <div class="overview__stats">
                {overview_stats(role).into_iter().map(|stat| view! {
                    <StatCard
                        label=stat.label
                        value=stat.value.to_string()
                        icon_name=stat.icon
                        color=stat.color
                        hint=stat.hint.map(str::to_string)
                    />
                }).collect_view()}
            </div>
            <SalesChart
                percentage=target
                title=target_title.to_string()
                caption="of target".to_string()
            />
        </div>
    }
}
