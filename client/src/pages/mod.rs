//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Dashboard pages assume their layout already passed the
//! role gate.

pub mod admin;
pub mod customer;
pub mod login;
pub mod marketing;
