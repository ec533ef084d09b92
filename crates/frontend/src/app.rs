use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_feedback::ui::details::FeedbackCategoryField;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <section class="feedback-form">
                <FeedbackCategoryField />
            </section>
            <section class="category-management">
                <CategoryList />
            </section>
        </main>
    }
}
