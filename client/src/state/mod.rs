//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only cross-page state is the signed-in session; everything else on
//! the site is static demo data.

pub mod auth;
