//! Map SDK seam and the bounded load/retry loop.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site map draws on a third-party browser SDK that arrives through an
//! injected `<script>` tag some time after page load. `MapSdk` narrows that
//! SDK to the handful of calls the site map needs, so the polling and retry
//! policy here can be exercised against a fake.
//!
//! TRADE-OFFS
//! ==========
//! Loading cannot be cancelled. Once started, `load_map` runs to `Ready` or
//! `Unavailable`; a page that unmounts early just ignores the result.

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

use std::future::Future;
use std::time::Duration;

use crate::data::sites::{LatLng, Site};

/// Failures reported by a [`MapSdk`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The SDK global is not present on the page.
    #[error("map SDK not loaded")]
    SdkMissing,

    #[error("map init failed: {0}")]
    Init(String),

    #[error("marker placement failed: {0}")]
    Marker(String),
}

/// Minimal surface of the mapping SDK.
pub trait MapSdk {
    /// Start loading the SDK with `api_key`. Repeated calls are no-ops.
    fn load_once(&self, api_key: &str);

    /// Whether the SDK global is available.
    fn is_ready(&self) -> bool;

    /// Create the map inside the element with id `container_id`.
    fn create_map(&self, container_id: &str, center: LatLng, zoom: u8) -> Result<(), MapError>;

    fn place_marker(&self, site: &Site) -> Result<(), MapError>;

    fn remove_all_markers(&self);
}

/// Display state of a map widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapStatus {
    #[default]
    Loading,
    Ready,
    /// Gave up; the widget shows its fallback for good.
    Unavailable,
}

/// Attempt ceilings and delays for [`load_map`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Readiness re-checks after the first one.
    pub poll_attempts: u32,
    /// Delay before re-check `n` is `poll_step * n`.
    pub poll_step: Duration,
    /// Map-creation retries after the first try.
    pub init_retries: u32,
    /// Delay before retry `n` is `init_step * n`.
    pub init_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            poll_attempts: 10,
            poll_step: Duration::from_millis(200),
            init_retries: 5,
            init_step: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn poll_delay(&self, attempt: u32) -> Duration {
        self.poll_step * attempt
    }

    pub fn init_delay(&self, retry: u32) -> Duration {
        self.init_step * retry
    }
}

/// Where and how to draw the map.
#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
}

/// Loader script for the browser SDK; the key goes in the `key` query param.
pub const SDK_SCRIPT_BASE: &str = "https://maps.googleapis.com/maps/api/js";

/// Script URL for `api_key`, passed through `encode` (a URI component
/// encoder) so reserved characters cannot alter the query.
pub fn sdk_script_src<E>(api_key: &str, encode: E) -> String
where
    E: FnOnce(&str) -> String,
{
    format!("{SDK_SCRIPT_BASE}?key={}", encode(api_key))
}

/// Default center when no sites are supplied (continental US).
pub const DEFAULT_CENTER: LatLng = LatLng { lat: 39.8283, lng: -98.5795 };

/// Mean coordinate of `sites`, or [`DEFAULT_CENTER`] when empty.
pub fn center_of(sites: &[Site]) -> LatLng {
    if sites.is_empty() {
        return DEFAULT_CENTER;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = sites.len() as f64;
    let (lat, lng) = sites
        .iter()
        .fold((0.0, 0.0), |(lat, lng), s| (lat + s.coordinates.lat, lng + s.coordinates.lng));
    LatLng { lat: lat / n, lng: lng / n }
}

/// Load the SDK and create the map, giving up after the policy's ceilings.
///
/// `sleep` supplies the delay future so callers pick the timer (gloo-timers
/// in the browser, an immediate future in tests).
pub async fn load_map<M, F, Fut>(
    sdk: &M,
    policy: &RetryPolicy,
    api_key: Option<&str>,
    options: &MapOptions,
    sleep: F,
) -> MapStatus
where
    M: MapSdk + ?Sized,
    F: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let Some(api_key) = api_key.filter(|k| !k.is_empty()) else {
        leptos::logging::warn!("map disabled: no API key configured");
        return MapStatus::Unavailable;
    };

    sdk.load_once(api_key);

    let mut ready = sdk.is_ready();
    let mut attempt = 0;
    while !ready && attempt < policy.poll_attempts {
        attempt += 1;
        sleep(policy.poll_delay(attempt)).await;
        ready = sdk.is_ready();
    }
    if !ready {
        leptos::logging::warn!("map SDK not ready after {attempt} polls");
        return MapStatus::Unavailable;
    }

    for retry in 0..=policy.init_retries {
        if retry > 0 {
            sleep(policy.init_delay(retry)).await;
        }
        match sdk.create_map(&options.container_id, options.center, options.zoom) {
            Ok(()) => return MapStatus::Ready,
            Err(e) => leptos::logging::warn!("map init attempt {} failed: {e}", retry + 1),
        }
    }
    MapStatus::Unavailable
}

/// Place one marker per site. Returns how many were placed.
pub fn place_markers<M: MapSdk + ?Sized>(sdk: &M, sites: &[Site]) -> usize {
    sdk.remove_all_markers();
    sites
        .iter()
        .filter(|site| match sdk.place_marker(site) {
            Ok(()) => true,
            Err(e) => {
                leptos::logging::warn!("marker for {} skipped: {e}", site.id);
                false
            }
        })
        .count()
}
