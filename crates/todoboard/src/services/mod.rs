//! Authorization-scoped operations on clipboards and items.
//!
//! Services talk to storage only. Cache reads and invalidation happen in the
//! handlers, driven by what these operations return.

mod clipboards;
mod items;

pub use clipboards::ClipboardService;
pub use items::ItemService;
