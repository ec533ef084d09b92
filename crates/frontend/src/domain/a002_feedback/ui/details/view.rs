use super::view_model::FeedbackDetailsVm;
use crate::domain::a001_category::ui::list::{CategoryList, FeedbackCategorySink};
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Category field of the feedback form with an inline category picker
#[component]
#[allow(non_snake_case)]
pub fn FeedbackCategoryField() -> impl IntoView {
    let vm = FeedbackDetailsVm::new();
    // the picker only holds a weak reference, the form keeps the strong one
    let sink: Arc<dyn FeedbackCategorySink> = Arc::new(vm);
    let category_title = vm.category_title();

    view! {
        <div class="form-group feedback-category">
            <label>{"Category"}</label>
            <Flex align=FlexAlign::Center>
                {move || {
                    let title = category_title.get();
                    if title.is_empty() {
                        view! { <span class="placeholder">"Not selected"</span> }.into_any()
                    } else {
                        view! { <span>{title}</span> }.into_any()
                    }
                }}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.open_picker()>
                    {icon("list")}
                    " Choose"
                </Button>
            </Flex>

            <Show when=move || vm.picking.get()>
                <CategoryList
                    feedback=sink.clone()
                    on_selected=Callback::new(move |_| vm.close_picker())
                />
            </Show>
        </div>
    }
}
