//! # consty-state
//!
//! The application-state container: one owned `AppState` struct updated
//! through an explicit `Action` dispatch, replacing the ambient
//! context/reducer the original UI used. Single writer; the remote API
//! stays the source of truth and lists are replaced wholesale after each
//! write (refetch-after-write), never patched locally. The one exception
//! is the optimistic usage-log update, which is reconciled on the next
//! refresh.

mod action;
mod app;

pub use action::{Action, Modal};
pub use app::{AppState, DashboardStats, ResourceKind};
