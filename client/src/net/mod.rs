//! Integrations with browser-side services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `maps` defines the map SDK seam and its retry policy; `google_maps` is the
//! browser implementation and only exists in hydrate builds.

#[cfg(feature = "hydrate")]
pub mod google_maps;
pub mod maps;
