//! Build-time client configuration.
//!
//! The browser bundle has no process environment, so the maps credential is
//! captured from `RIVERWATTS_MAPS_API_KEY` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Maps API key baked into this build, if any.
pub fn maps_api_key() -> Option<&'static str> {
    non_empty(option_env!("RIVERWATTS_MAPS_API_KEY"))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
