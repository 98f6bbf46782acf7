//! The daily record keeper.
//!  - [store::DailyStore] is the handle the rest of the application works with.
//!  - [lifecycle] decides when stored records belong to a previous day and moves them between
//!    storage and memory.
//!  - [state::DailyState] holds the logs and keeps the totals derived from them.
//!  - Storage backends live in [storage].

pub mod entities;
pub mod error;
pub mod lifecycle;
pub mod state;
pub mod storage;
pub mod store;
pub mod summary;
