//! Public marketing site. Static content only.

pub mod footer;
pub mod navbar;
pub mod sections;

use footer::Footer;
use leptos::prelude::*;
use navbar::Navbar;
use sections::{About, Coaches, Hero, Plans, Visit};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="site">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Coaches />
                <Plans />
                <Visit />
            </main>
            <Footer />
        </div>
    }
}
