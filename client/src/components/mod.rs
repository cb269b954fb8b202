//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitives (`badge`, `button`, `card`, `data_table`, `stat_card`) render
//! demo data; `dashboard_layout`, `require_role`, and `sidebar` make up the
//! role-gated dashboard shell; `site_chrome` wraps public pages.

pub mod badge;
pub mod button;
pub mod card;
pub mod dashboard_layout;
pub mod data_table;
pub mod require_role;
pub mod sidebar;
pub mod site_chrome;
pub mod site_map;
pub mod stat_card;
