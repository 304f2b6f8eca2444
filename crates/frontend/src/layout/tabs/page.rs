//! TabPage - wrapper around the single mounted content region.

use super::registry::render_tab_content;
use contracts::system::auth::Identity;
use leptos::logging::log;
use leptos::prelude::*;

/// Mounts the region for `tab_key`. The shell re-creates it on every tab
/// switch, so region-local state (open dialogs, drafts) does not survive one.
#[component]
pub fn TabPage(tab_key: String, identity: Identity) -> impl IntoView {
    log!("TabPage mounted: '{}'", tab_key);

    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("TabPage unmounted: '{}'", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab_key, &identity);

    view! {
        <section class="tabs__item" data-tab-key=tab_key>
            {content}
        </section>
    }
}
