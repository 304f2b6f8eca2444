use crate::shared::icons::icon;
use contracts::shared::site::{
    ABOUT_HIGHLIGHTS, ABOUT_TEXT, ADDRESS, COACHES, EMAIL, GYM_NAME, HERO_TEXT, MAP_EMBED_URL,
    OPENING_HOURS, PHONE, PLANS, TAGLINE,
};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="top">
            <div class="hero__content">
                <h1 class="hero__title">{TAGLINE}</h1>
                <p class="hero__text">{HERO_TEXT}</p>
                <div class="hero__actions">
                    <a class="button button--primary" href="#plans">"See plans"</a>
                    <a class="button button--secondary" href="#visit">"Visit us"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <h2>{format!("About {GYM_NAME}")}</h2>
            <p>{ABOUT_TEXT}</p>
            <div class="about__highlights">
                {ABOUT_HIGHLIGHTS.iter().map(|(value, label)| view! {
                    <div class="about__highlight">
                        <span class="about__value">{*value}</span>
                        <span class="about__label">{*label}</span>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Coaches() -> impl IntoView {
    view! {
        <section class="coaches" id="coaches">
            <h2>"Our coaches"</h2>
            <div class="coaches__grid">
                {COACHES.iter().map(|coach| view! {
                    <article class="coach-card">
                        <div class="coach-card__avatar">{icon("user")}</div>
                        <h3>{coach.name}</h3>
                        <span class="coach-card__specialty">{coach.specialty}</span>
                        <p>{coach.bio}</p>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Plans() -> impl IntoView {
    view! {
        <section class="plans" id="plans">
            <h2>"Membership plans"</h2>
            <div class="plans__grid">
                {PLANS.iter().map(|plan| view! {
                    <article class="plan-card" class:plan-card--featured=plan.featured>
                        {plan.featured.then(|| view! { <span class="plan-card__badge">"Most popular"</span> })}
                        <h3>{plan.name}</h3>
                        <p class="plan-card__price">
                            <span>{format!("${}", plan.monthly_price)}</span>
                            "/month"
                        </p>
                        <ul>
                            {plan.features.iter().map(|feature| view! {
                                <li>{icon("check")}{*feature}</li>
                            }).collect_view()}
                        </ul>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Visit() -> impl IntoView {
    view! {
        <section class="visit" id="visit">
            <h2>"Visit us"</h2>
            <div class="visit__grid">
                <div class="visit__info">
                    <p>{icon("map-pin")}{ADDRESS}</p>
                    <p>{icon("phone")}{PHONE}</p>
                    <p>{icon("mail")}<a href=format!("mailto:{EMAIL}")>{EMAIL}</a></p>
                    <h3>{icon("clock")}"Opening hours"</h3>
                    <ul class="visit__hours">
                        {OPENING_HOURS.iter().map(|(days, hours)| view! {
                            <li><span>{*days}</span><span>{*hours}</span></li>
                        }).collect_view()}
                    </ul>
                </div>
                <iframe
                    class="visit__map"
                    title="Map"
                    {..leptos::tachys::html::attribute::loading("lazy")}
                    src=MAP_EMBED_URL
                ></iframe>
            </div>
        </section>
    }
}
