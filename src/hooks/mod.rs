//! Hooks and the tables that declare which transitions exist.
//!
//! Registering a hook for a `(from, to)` pair is what makes the
//! transition legal; there is no separate allow list.

mod hook;
mod table;

pub use hook::{Hook, HookPhase};
pub use table::HookTable;
