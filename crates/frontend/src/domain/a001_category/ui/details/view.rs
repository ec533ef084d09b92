use crate::domain::a001_category::ui::list::CategoryListVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails(vm: CategoryListVm, on_close: Callback<()>) -> impl IntoView {
    let is_edit_mode = {
        let selected_index = vm.selected_index;
        Signal::derive(move || selected_index.get().is_some())
    };

    // Save handler: modify when a row was opened, add otherwise
    let handle_save = {
        let vm = vm.clone();
        move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = if vm.selected_index.get_untracked().is_some() {
                    vm.mod_category().await
                } else {
                    vm.add_category().await
                };
                if result.is_ok() {
                    on_close.run(());
                }
            });
        }
    };

    let title_input = vm.title_input;
    let color_input = vm.color_input;
    let error = vm.error;
    let vm_title = vm.clone();
    let vm_color = vm.clone();

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>
                    {move || if is_edit_mode.get() { "Edit category" } else { "New category" }}
                </h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="category_title">{"Title"}</label>
                    <input
                        type="text"
                        id="category_title"
                        prop:value=move || title_input.get()
                        on:input=move |ev| vm_title.on_title_input(event_target_value(&ev))
                        placeholder="Category title"
                    />
                </div>

                <div class="form-group">
                    <label for="category_color">{"Color"}</label>
                    <input
                        type="color"
                        id="category_color"
                        prop:value=move || color_input.get()
                        on:input=move |ev| vm_color.on_color_input(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                        {icon("save")}
                        {move || if is_edit_mode.get() { " Save" } else { " Create" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("cancel")}
                        " Cancel"
                    </Button>
                </Space>
            </div>
        </div>
    }
}
