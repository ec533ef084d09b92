//! Feedback form: the part that links a category
//!
//! - view_model.rs: selected category state, receives picker results
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::FeedbackCategoryField;
pub use view_model::FeedbackDetailsVm;
