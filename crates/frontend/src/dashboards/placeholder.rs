use crate::shared::components::PageHeader;
use leptos::prelude::*;

/// Region for menu entries whose screens are provided elsewhere.
#[component]
pub fn RegionPlaceholder(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="region-placeholder">
            <PageHeader title=title.clone() />
            <div class="region-placeholder__body">
                <p>{format!("{title} will appear here.")}</p>
            </div>
        </div>
    }
}
