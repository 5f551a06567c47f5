mod request_form;

use crate::api::use_services;
use crate::web::task::{spawn_bound, use_task_scope};
use crossborder_shared::{Trip, TripId};
use leptos::prelude::*;
use request_form::RequestForm;

const LOAD_FAILED: &str = "Could not load trip";

#[component]
pub fn TripDetailPage(id: TripId) -> impl IntoView {
    let trips_api = use_services().trips;
    let tasks = use_task_scope();

    let (trip, set_trip) = signal(Option::<Trip>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load_trip = move || {
        set_error_msg.set(None);
        let api = trips_api.clone();
        let id = id.clone();
        spawn_bound(&tasks, async move {
            match api.get(&id).await {
                Ok(data) => set_trip.set(Some(data)),
                Err(e) => {
                    log::warn!("trip {} failed to load: {}", id, e);
                    set_error_msg.set(Some(e.user_message(LOAD_FAILED)));
                }
            }
        });
    };

    // 初始加载
    load_trip();

    view! {
        <div class="p-6 max-w-4xl mx-auto">
            {move || match (trip.get(), error_msg.get()) {
                (Some(trip), _) => view! {
                    <h2 class="text-xl font-bold mb-2">{trip.route_label()}</h2>
                    <p class="text-sm text-base-content/70">"Traveler: " {trip.traveler_label()}</p>
                    <p class="text-sm text-base-content/70">"Date: " {trip.date.display()}</p>
                    <div class="divider"></div>
                    <RequestForm trip_id=trip.id.clone() />
                }
                .into_any(),
                (None, Some(err)) => {
                    let retry = load_trip.clone();
                    view! {
                        <div role="alert" class="alert alert-error">
                            <span>{err}</span>
                            <button class="btn btn-sm" on:click=move |_| retry()>"Retry"</button>
                        </div>
                    }
                    .into_any()
                }
                (None, None) => view! { <div>"Loading trip..."</div> }.into_any(),
            }}
        </div>
    }
}
