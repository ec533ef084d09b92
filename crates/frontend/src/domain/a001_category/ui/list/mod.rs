//! Category list screen
//!
//! MVVM split:
//! - model.rs: `CategoryApi` seam and its HTTP implementation
//! - view_model.rs: list/draft/selection state and CRUD commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::{ApiError, CategoryApi, HttpCategoryApi};
pub use view::CategoryList;
pub use view_model::{CategoryError, CategoryListVm, CategoryNavigator, FeedbackCategorySink};
