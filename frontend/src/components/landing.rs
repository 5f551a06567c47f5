use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="hero py-16">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-4xl font-bold">"Welcome to CrossBorder"</h1>
                    <p class="py-6 text-base-content/70">
                        "Find a traveler heading your way and ask them to bring back what you need."
                    </p>
                    <Link to="/trips" class="btn btn-primary">"View trips"</Link>
                </div>
            </div>
        </div>
    }
}
