use crate::api::use_services;
use crate::auth::{logout, use_auth};
use crate::web::router::{Link, use_router};
use crossborder::AppRoute;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth_ctx = use_auth();
    let auth = use_services().auth;
    let router = use_router();

    let on_logout = move |_| {
        logout(&auth_ctx, &auth);
        router.navigate(&AppRoute::Login.to_path());
    };

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1">
                <Link to="/" class="btn btn-ghost text-xl">"CrossBorder"</Link>
            </div>
            <div class="flex-none gap-2">
                <Link to="/trips" class="btn btn-ghost btn-sm">"Trips"</Link>
                <Show
                    when=move || auth_ctx.user().is_some()
                    fallback=|| view! {
                        <Link to="/login" class="btn btn-ghost btn-sm">"Login"</Link>
                        <Link to="/signup" class="btn btn-ghost btn-sm">"Signup"</Link>
                    }
                >
                    <Link to="/dashboard" class="btn btn-ghost btn-sm">
                        {move || auth_ctx.user().map(|u| u.username).unwrap_or_else(|| "Dashboard".to_string())}
                    </Link>
                    <button on:click=on_logout.clone() class="btn btn-outline btn-error btn-sm">
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
