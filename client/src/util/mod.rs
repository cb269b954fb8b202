//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decision logic (guards, navigation, table ordering,
//! counters) and browser concerns (storage) out of page and component code
//! so they can be tested on the host.

pub mod counter;
pub mod guard;
pub mod markdown;
pub mod nav;
pub mod storage;
pub mod table;
