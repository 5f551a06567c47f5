use crate::auth::use_auth;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();

    let username = move || {
        auth_ctx
            .user()
            .map(|u| u.username)
            .unwrap_or_else(|| "user".to_string())
    };

    view! {
        <div class="p-6 max-w-4xl mx-auto">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Dashboard"</h2>
                    <p>"Welcome " {username} ". This is your dashboard."</p>
                </div>
            </div>
        </div>
    }
}
