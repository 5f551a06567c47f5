//! 代购请求子表单
//!
//! 表单字段整合在 `FormState` 中，负责数据的持有、重置以及到请求表单的转换。

use crate::api::use_services;
use crate::web::task::{spawn_bound, use_task_scope};
use crossborder::PurchaseForm;
use crossborder_shared::TripId;
use leptos::prelude::*;

const REQUEST_CREATED: &str = "Request created";
const REQUEST_FAILED: &str = "Request failed";

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，可以直接在闭包间传递。
#[derive(Clone, Copy)]
struct FormState {
    product_name: RwSignal<String>,
    description: RwSignal<String>,
}

impl FormState {
    fn new() -> Self {
        Self {
            product_name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.product_name.set(String::new());
        self.description.set(String::new());
    }

    fn to_form(self) -> PurchaseForm {
        PurchaseForm {
            product_name: self.product_name.get(),
            description: self.description.get(),
        }
    }
}

#[component]
pub fn RequestForm(trip_id: TripId) -> impl IntoView {
    let trips_api = use_services().trips;
    let tasks = use_task_scope();

    let form = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    // 消息内容, 是否出错
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let purchase = form.to_form();
        if let Err(e) = purchase.validate() {
            set_notification.set(Some((e.to_string(), true)));
            return;
        }

        set_is_submitting.set(true);
        set_notification.set(None);
        let api = trips_api.clone();
        let trip_id = trip_id.clone();
        spawn_bound(&tasks, async move {
            match api.request_item(&trip_id, &purchase).await {
                Ok(()) => {
                    set_notification.set(Some((REQUEST_CREATED.to_string(), false)));
                    form.reset();
                }
                Err(e) => {
                    set_notification.set(Some((e.user_message(REQUEST_FAILED), true)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="max-w-md space-y-3">
            <Show when=move || notification.get().is_some()>
                <div class=move || {
                    let is_err = notification.get().map(|(_, is_err)| is_err).unwrap_or(false);
                    if is_err { "alert alert-error text-sm py-2" } else { "alert alert-success text-sm py-2" }
                }>
                    <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </Show>

            <input
                required
                type="text"
                placeholder="Product name"
                on:input=move |ev| form.product_name.set(event_target_value(&ev))
                prop:value=form.product_name
                class="input input-bordered w-full"
            />
            <textarea
                required
                placeholder="Description"
                on:input=move |ev| form.description.set(event_target_value(&ev))
                prop:value=form.description
                class="textarea textarea-bordered w-full"
            ></textarea>
            <button class="btn btn-success" disabled=move || is_submitting.get()>
                "Request Item"
            </button>
        </form>
    }
}
