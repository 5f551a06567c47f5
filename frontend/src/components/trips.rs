use crate::api::use_services;
use crate::web::router::Link;
use crate::web::task::{spawn_bound, use_task_scope};
use crossborder::AppRoute;
use crossborder_shared::Trip;
use leptos::prelude::*;

const LOAD_FAILED: &str = "Could not load trips";

/// 列表项标题：旅行者名称，缺失时用行程编号
fn trip_title(trip: &Trip) -> String {
    let label = trip.traveler_label();
    if label.is_empty() {
        format!("Trip #{}", trip.id)
    } else {
        label
    }
}

#[component]
pub fn TripsPage() -> impl IntoView {
    let trips_api = use_services().trips;
    let tasks = use_task_scope();

    let (trips, set_trips) = signal(Vec::<Trip>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load_trips = move || {
        set_loading.set(true);
        set_error_msg.set(None);
        let api = trips_api.clone();
        spawn_bound(&tasks, async move {
            match api.list().await {
                Ok(data) => set_trips.set(data),
                Err(e) => {
                    log::warn!("trip list failed: {}", e);
                    set_error_msg.set(Some(e.user_message(LOAD_FAILED)));
                }
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    load_trips();

    let is_empty = move || trips.with(|t| t.is_empty());

    view! {
        <div class="p-6 max-w-4xl mx-auto">
            <h2 class="text-xl font-bold mb-4">"Trips"</h2>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error mb-4">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                    <button class="btn btn-sm" on:click={
                        let retry = load_trips.clone();
                        move |_| retry()
                    }>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show when=move || loading.get() && is_empty()>
                <div class="text-center py-8 text-base-content/50">
                    <span class="loading loading-spinner loading-md"></span> " Loading..."
                </div>
            </Show>

            <Show when=move || !loading.get() && is_empty() && error_msg.get().is_none()>
                <p class="text-center py-8 text-base-content/50">"No trips yet."</p>
            </Show>

            <ul class="space-y-3">
                <For
                    each=move || trips.get()
                    key=|trip| trip.id.clone()
                    children=move |trip| {
                        let href = AppRoute::TripDetail(trip.id.clone()).to_path();
                        view! {
                            <li class="card bg-base-100 shadow p-4">
                                <Link to=href class="font-semibold link link-hover">
                                    {trip_title(&trip)}
                                </Link>
                                <div class="text-sm text-base-content/70">
                                    {trip.route_label()} " · " {trip.date.display()}
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
