//! Category editor
//!
//! Has no view-model of its own: it edits the draft of the list view-model
//! that opened it.

mod view;

pub use view::CategoryDetails;
