use crate::api::use_services;
use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use crate::web::task::{spawn_bound, use_task_scope};
use crossborder::{AppRoute, LoginForm};
use leptos::prelude::*;

const LOGIN_FAILED: &str = "Login failed";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let auth = use_services().auth;
    let router = use_router();
    let tasks = use_task_scope();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let form = LoginForm {
            username: username.get(),
            password: password.get(),
        };
        if let Err(e) = form.validate() {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_is_submitting.set(true);
        let auth = auth.clone();
        spawn_bound(&tasks, async move {
            let result = auth.login(&form).await;
            set_is_submitting.set(false);
            match result {
                Ok(state) => {
                    auth_ctx.set_state.set(state);
                    router.navigate(&AppRoute::auth_success_redirect().to_path());
                }
                Err(e) => set_error_msg.set(Some(e.user_message(LOGIN_FAILED))),
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12 card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h2 class="card-title text-2xl">"Log in"</h2>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="form-control">
                    <label class="label" for="username">
                        <span class="label-text">"Username"</span>
                    </label>
                    <input
                        id="username"
                        type="text"
                        placeholder="username"
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        prop:value=username
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">"Password"</span>
                    </label>
                    <input
                        id="password"
                        type="password"
                        placeholder="password"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                        } else {
                            "Log in".into_any()
                        }}
                    </button>
                </div>
                <p class="text-sm text-center mt-4">
                    "Don't have an account? "
                    <Link to="/signup" class="link link-primary">"Sign up"</Link>
                </p>
            </form>
        </div>
    }
}
