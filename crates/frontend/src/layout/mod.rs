pub mod dashboard_state;
pub mod global_context;
pub mod header;
pub mod left;
pub mod tabs;

use crate::shared::confirm_modal::ConfirmModal;
use crate::system::session::{do_logout, use_session};
use contracts::shared::overlay::ConfirmVariant;
use contracts::system::auth::Identity;
use global_context::DashboardContext;
use header::DashboardHeader;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use left::Sidebar;
use tabs::TabPage;

/// Dashboard shell.
///
/// Layout structure:
/// ```text
/// +-----------+------------------------------+
/// |           |       DashboardHeader        |
/// |  Sidebar  +------------------------------+
/// |           |   content region (1 at once) |
/// +-----------+------------------------------+
///               + logout confirmation overlay
/// ```
///
/// Owns `DashboardContext`: the active tab and the shell-level overlay. Children
/// only read it and send intents back through callbacks.
#[component]
pub fn DashboardShell(identity: Identity) -> impl IntoView {
    let ctx = DashboardContext::new(identity.role);
    provide_context(ctx);

    let session = use_session();
    let navigate = use_navigate();
    let signed_out = RwSignal::new(false);

    // Leave the dashboard only after the logout action has returned
    Effect::new(move |_| {
        if signed_out.get() {
            navigate("/", Default::default());
        }
    });

    let menu = ctx.menu();
    let active_tab = Memo::new(move |_| ctx.active_tab());
    let title = Signal::derive(move || active_tab.with(|id| menu.label_for(id).to_string()));
    let sidebar_open = Signal::derive(move || ctx.sidebar_open.get());
    let collapsed = Signal::derive(move || !ctx.sidebar_open.get());
    let logout_open = Signal::derive(move || ctx.state.with(|s| s.is_logout_confirm_open()));
    let logout_pending = Signal::derive(move || ctx.state.with(|s| s.logout_pending()));

    let on_tab_change = Callback::new(move |id: String| ctx.on_tab_change(&id));
    let on_logout = Callback::new(move |_| ctx.request_logout());
    let on_toggle_sidebar = Callback::new(move |_| ctx.toggle_sidebar());
    let on_cancel_logout = Callback::new(move |_| ctx.cancel_overlay());
    let on_confirm_logout = Callback::new(move |_| {
        if !ctx.begin_logout() {
            return;
        }
        log::info!("logout confirmed");
        spawn_local(async move {
            if let Err(err) = do_logout(session).await {
                log::error!("logout failed: {}", err);
            }
            ctx.finish_logout();
            signed_out.set(true);
        });
    });

    let content_identity = identity.clone();
    let content = move || {
        let tab_key = active_tab.get();
        view! { <TabPage tab_key=tab_key identity=content_identity.clone() /> }
    };

    view! {
        <div class="dashboard-layout" class:dashboard-layout--collapsed=collapsed>
            <Sidebar
                role=identity.role
                active_tab=active_tab
                on_tab_change=on_tab_change
                on_logout=on_logout
                collapsed=collapsed
            />
            <div class="dashboard-main">
                <DashboardHeader
                    identity=identity
                    title=title
                    sidebar_open=sidebar_open
                    on_toggle_sidebar=on_toggle_sidebar
                />
                <main class="dashboard-content">
                    {content}
                </main>
            </div>
            <ConfirmModal
                is_open=logout_open
                on_close=on_cancel_logout
                on_confirm=on_confirm_logout
                title="Log out".to_string()
                message="You will be returned to the public site. Any unsaved changes will be lost.".to_string()
                variant=ConfirmVariant::Warning
                confirm_text="Log out".to_string()
                is_loading=logout_pending
            />
        </div>
    }
}
