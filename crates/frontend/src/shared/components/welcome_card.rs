use contracts::shared::stats::welcome_subtitle;
use contracts::system::auth::Role;
use leptos::prelude::*;

#[component]
pub fn WelcomeCard(
    role: Role,
    #[prop(into)]
    user_name: String,
    /// Falls back to the role's default text
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let first_name = user_name
        .split_whitespace()
        .next()
        .unwrap_or(&user_name)
        .to_string();
    let subtitle_text = move || {
        subtitle
            .get()
            .unwrap_or_else(|| welcome_subtitle(role).to_string())
    };

    view! {
        <div class="welcome-card">
            <div class="welcome-card__text">
                <h2 class="welcome-card__title">{format!("Welcome back, {first_name}!")}</h2>
                <p class="welcome-card__subtitle">{subtitle_text}</p>
            </div>
            <span class="welcome-card__role">{role.display_name()}</span>
        </div>
    }
}
