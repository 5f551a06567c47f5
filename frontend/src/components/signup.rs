use crate::api::use_services;
use crate::web::dialog::alert;
use crate::web::router::{Link, use_router};
use crate::web::task::{spawn_bound, use_task_scope};
use crossborder::{AppRoute, SignupForm};
use leptos::prelude::*;

const SIGNUP_FAILED: &str = "Signup failed";
const SIGNUP_SUCCEEDED: &str = "Signup successful. Please log in.";

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_services().auth;
    let router = use_router();
    let tasks = use_task_scope();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let form = SignupForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
        };
        // 校验失败时不发出任何请求
        if let Err(e) = form.validate() {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_is_submitting.set(true);
        let auth = auth.clone();
        spawn_bound(&tasks, async move {
            let result = auth.signup(&form).await;
            set_is_submitting.set(false);
            match result {
                Ok(()) => {
                    alert(SIGNUP_SUCCEEDED);
                    router.navigate(&AppRoute::Login.to_path());
                }
                Err(e) => set_error_msg.set(Some(e.user_message(SIGNUP_FAILED))),
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12 card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h2 class="card-title text-2xl">"Create an account"</h2>

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
                        placeholder="your username"
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        prop:value=username
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
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
                        placeholder="at least 6 characters"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control mt-6">
                    <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                        } else {
                            "Sign up".into_any()
                        }}
                    </button>
                </div>
                <p class="text-sm text-center mt-4">
                    "Already have an account? "
                    <Link to="/login" class="link link-primary">"Log in"</Link>
                </p>
            </form>
        </div>
    }
}
