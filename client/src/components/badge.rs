//! Status pill used in tables, cards, and the site list.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    #[default]
    Neutral,
}

impl BadgeTone {
    /// Tone for a status word from the demo data.
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "online" | "active" | "paid" => Self::Success,
            "maintenance" | "trial" | "due" | "warning" => Self::Warning,
            "offline" | "suspended" | "overdue" | "critical" => Self::Danger,
            "info" => Self::Info,
            _ => Self::Neutral,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "badge badge--success",
            Self::Warning => "badge badge--warning",
            Self::Danger => "badge badge--danger",
            Self::Info => "badge badge--info",
            Self::Neutral => "badge badge--neutral",
        }
    }
}

/// Pill whose color follows the status text unless `tone` is given.
#[component]
pub fn Badge(#[prop(into)] label: String, #[prop(optional)] tone: Option<BadgeTone>) -> impl IntoView {
    let tone = tone.unwrap_or_else(|| BadgeTone::for_status(&label));
    view! { <span class=tone.class()>{label}</span> }
}
