use crate::shared::icons::icon;
use contracts::shared::stats::StatColor;
use leptos::prelude::*;

/// Display-only stat tile: label, pre-formatted value, icon, colour category.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Pre-formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(optional)]
    color: StatColor,
    /// Optional hint below the value (e.g. "+12% vs last month")
    #[prop(optional, into)]
    hint: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", color.class())>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || hint.get().map(|h| view! {
                    <div class="stat-card__subtitle">{h}</div>
                })}
            </div>
        </div>
    }
}
