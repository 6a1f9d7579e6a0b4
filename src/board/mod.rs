//! Map representation and territory storage.
//!
//! Contains the core data structures for army colors, territories, and
//! the fixed-capacity store that holds a session's map.

pub mod color;
pub mod store;
pub mod territory;

pub use color::{ArmyColor, ALL_COLORS};
pub use store::{StoreError, TerritoryStore};
pub use territory::Territory;
