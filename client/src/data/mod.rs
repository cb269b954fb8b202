//! Hard-coded demo data rendered by the dashboards and marketing pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend for the demo; every table, card, and marker reads
//! from these constant tables.


pub mod accounts;
pub mod catalog;
pub mod sites;
