//! Browsing session: wires the catalog view and the estimate to UI actions
//! and produces render-ready snapshots.

pub mod action;
pub mod config;
pub mod session;
pub mod snapshot;
pub mod theme;

pub use action::{DispatchOutcome, SessionAction};
pub use config::SessionConfig;
pub use session::Session;
pub use snapshot::{Pagination, ProductRow, SessionSnapshot};
pub use theme::{Theme, ThemeContext};
