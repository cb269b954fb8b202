//! Map of turbine sites with a plain-list fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives `net::maps::load_map` against the browser SDK once the container
//! is mounted. While loading, and forever after a failed load, the site list
//! below the map is the usable view; the page around it never breaks.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::data::sites::Site;
use crate::net::maps::MapStatus;

#[component]
pub fn SiteMap(
    sites: Vec<Site>,
    #[prop(default = "site-map")] container_id: &'static str,
    #[prop(default = 4)] zoom: u8,
) -> impl IntoView {
    let status = RwSignal::new(MapStatus::Loading);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::google_maps::GoogleMapsSdk;
        use crate::net::maps::{MapOptions, MapSdk, RetryPolicy, center_of, load_map, place_markers};

        let markers = sites.clone();
        Effect::new(move || {
            let markers = markers.clone();
            leptos::task::spawn_local(async move {
                let sdk = GoogleMapsSdk;
                let options = MapOptions { container_id: container_id.to_owned(), center: center_of(&markers), zoom };
                let result = load_map(&sdk, &RetryPolicy::default(), crate::config::maps_api_key(), &options, |d| {
                    gloo_timers::future::sleep(d)
                })
                .await;
                if result == MapStatus::Ready {
                    let placed = place_markers(&sdk, &markers);
                    leptos::logging::log!("site map ready with {placed} markers");
                }
                if !status.is_disposed() {
                    status.set(result);
                }
            });
        });
        on_cleanup(|| GoogleMapsSdk.remove_all_markers());
    }

    let list = sites
        .into_iter()
        .map(|site| {
            view! {
                <li class="site-map__item">
                    <span class="site-map__name">{site.name}</span>
                    <span class="site-map__location">{site.location}</span>
                    <Badge label=site.status.label()/>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="site-map">
            <div
                id=container_id
                class="site-map__canvas"
                class:site-map__canvas--hidden=move || status.get() == MapStatus::Unavailable
            ></div>
            <Show when=move || status.get() == MapStatus::Loading>
                <p class="site-map__notice">"Loading map..."</p>
            </Show>
            <Show when=move || status.get() == MapStatus::Unavailable>
                <p class="site-map__notice site-map__notice--error">"Map unavailable. Sites are listed below."</p>
            </Show>
            <ul class="site-map__list">{list}</ul>
        </div>
    }
}
