//! Sidebar - role-scoped navigation.
//!
//! Reads `role` and `active_tab`, emits tab-change and logout intents. It never
//! writes shell state itself and performs no confirmation.

use crate::shared::icons::icon;
use contracts::shared::navigation::MenuDefinition;
use contracts::shared::site::GYM_NAME;
use contracts::system::auth::Role;
use leptos::prelude::*;

#[component]
pub fn Sidebar(
    role: Role,
    /// Id of the active tab; an id outside the menu highlights nothing
    #[prop(into)]
    active_tab: Signal<String>,
    on_tab_change: Callback<String>,
    on_logout: Callback<()>,
    /// Collapsed sidebar shows icons only
    #[prop(optional, into)]
    collapsed: MaybeProp<bool>,
) -> impl IntoView {
    let menu = MenuDefinition::for_role(role);
    let is_collapsed = move || collapsed.get().unwrap_or(false);

    view! {
        <aside class="app-sidebar" class:app-sidebar--collapsed=is_collapsed>
            <div class="app-sidebar__brand">
                {icon("dumbbell")}
                <span class="app-sidebar__brand-name">{GYM_NAME}</span>
            </div>
            <nav class="app-sidebar__content" aria-label=format!("{} menu", role.display_name())>
                {menu.items.iter().map(|item| {
                    let id = item.id;
                    let is_active = move || active_tab.with(|active| active == id);
                    view! {
                        <button
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=is_active
                            aria-current=move || is_active().then_some("page")
                            title=item.label
                            data-tab-id=id
                            on:click=move |_| on_tab_change.run(id.to_string())
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span class="app-sidebar__label">{item.label}</span>
                            </div>
                        </button>
                    }
                }).collect_view()}
            </nav>
            <div class="app-sidebar__footer">
                <button class="app-sidebar__item app-sidebar__logout" on:click=move |_| on_logout.run(())>
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <span class="app-sidebar__label">"Logout"</span>
                    </div>
                </button>
            </div>
        </aside>
    }
}
