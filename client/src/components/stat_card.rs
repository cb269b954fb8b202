//! Headline number that counts up from zero once mounted.

use leptos::prelude::*;

use crate::util::counter::format_number;
#[cfg(feature = "hydrate")]
use crate::util::counter::{COUNTER_DURATION_MS, COUNTER_FRAME_MS, counter_value};

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    value: f64,
    #[prop(optional)] decimals: usize,
    #[prop(optional, into)] suffix: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    // Server render and first hydration pass show the final value.
    let shown = RwSignal::new(value);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let mut elapsed = 0.0;
            loop {
                if shown.is_disposed() {
                    break;
                }
                shown.set(counter_value(value, elapsed, COUNTER_DURATION_MS));
                if elapsed >= COUNTER_DURATION_MS {
                    break;
                }
                gloo_timers::future::TimeoutFuture::new(COUNTER_FRAME_MS).await;
                elapsed += f64::from(COUNTER_FRAME_MS);
            }
        });
    });

    let suffix = suffix.unwrap_or_default();
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || format_number(shown.get(), decimals)}{suffix}</span>
            {hint.map(|h| view! { <span class="stat-card__hint">{h}</span> })}
        </div>
    }
}
