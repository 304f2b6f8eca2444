use contracts::shared::stats::ProgressArc;
use leptos::prelude::*;

/// Circular progress indicator driven by a single percentage.
///
/// Values outside 0..=100 are drawn as-is.
#[component]
pub fn SalesChart(
    #[prop(into)]
    percentage: Signal<f64>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Caption under the percentage
    #[prop(optional, into)]
    caption: MaybeProp<String>,
) -> impl IntoView {
    let arc = Memo::new(move |_| ProgressArc::new(percentage.get()));

    view! {
        <div class="sales-chart">
            {move || title.get().map(|t| view! { <h3 class="sales-chart__title">{t}</h3> })}
            <div class="sales-chart__ring">
                <svg width="160" height="160" viewBox="0 0 100 100" class="sales-chart__svg">
                    <circle
                        class="sales-chart__track"
                        cx="50"
                        cy="50"
                        r=move || arc.get().radius.to_string()
                        fill="none"
                        stroke-width="8"
                    />
                    <circle
                        class="sales-chart__progress"
                        cx="50"
                        cy="50"
                        r=move || arc.get().radius.to_string()
                        fill="none"
                        stroke-width="8"
                        stroke-linecap="round"
                        stroke-dasharray=move || arc.get().circumference.to_string()
                        stroke-dashoffset=move || arc.get().dash_offset.to_string()
                        transform="rotate(-90 50 50)"
                    />
                </svg>
                <div class="sales-chart__label">
                    <span class="sales-chart__value">{move || format!("{:.0}%", percentage.get())}</span>
                    {move || caption.get().map(|c| view! { <span class="sales-chart__caption">{c}</span> })}
                </div>
            </div>
        </div>
    }
}
