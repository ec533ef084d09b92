use super::model::{CategoryApi, HttpCategoryApi};
use super::view_model::{CategoryListVm, CategoryNavigator, FeedbackCategorySink};
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::layout::{Modal, ModalService};
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::CategoryRecord;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Category list.
///
/// Without `feedback` the screen manages categories (add/edit/delete).
/// With `feedback` it is a picker: clicking a row publishes that category to
/// the feedback form and runs `on_selected`.
#[component]
#[allow(non_snake_case)]
pub fn CategoryList(
    #[prop(optional)] feedback: Option<Arc<dyn FeedbackCategorySink>>,
    #[prop(optional)] on_selected: Option<Callback<CategoryRecord>>,
) -> impl IntoView {
    let modal = ModalService::new();
    provide_context(modal);

    let api: Arc<dyn CategoryApi> = Arc::new(HttpCategoryApi::new());
    let navigator: Arc<dyn CategoryNavigator> = Arc::new(modal);
    let vm = match feedback.as_ref() {
        Some(feedback) => CategoryListVm::for_selection(api, navigator, feedback),
        None => CategoryListVm::new(api, navigator),
    };
    vm.start();

    let handle_add = {
        let vm = vm.clone();
        move |_| vm.begin_add()
    };

    let handle_row = {
        let vm = vm.clone();
        move |index: usize| {
            if vm.is_selection() {
                let picked = vm.mark_selection(index).and_then(|_| vm.select_category());
                match picked {
                    Ok(record) => {
                        if let Some(on_selected) = on_selected {
                            on_selected.run(record);
                        }
                    }
                    Err(e) => vm.error.set(Some(e.to_string())),
                }
            } else if let Err(e) = vm.begin_modify(index) {
                vm.error.set(Some(e.to_string()));
            }
        }
    };

    let handle_delete = {
        let vm = vm.clone();
        move |index: usize, title: String| {
            let confirmed = web_sys::window()
                .map(|win| {
                    win.confirm_with_message(&format!("Delete category \"{}\"?", title))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = vm.del_category(index).await;
            });
        }
    };

    let is_selection = vm.is_selection();
    let vm_view = vm.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {if is_selection { "Choose a category".to_string() } else { CategoryRecord::list_name().to_string() }}
                    </h1>
                </div>
                <Show when=move || !is_selection>
                    <div class="header__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=handle_add.clone()>
                            {icon("plus")}
                            " New category"
                        </Button>
                    </div>
                </Show>
            </div>

            {
                let vm = vm_view.clone();
                move || vm.error.get().map(|e| view! {
                    <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                        <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                        <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                    </div>
                })
            }

            {
                let vm = vm_view.clone();
                move || vm.loading.get().then(|| view! { <div class="loading">"Loading..."</div> })
            }

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Color"}</th>
                            <th class="table__header-cell">{"Title"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            let vm = vm_view.clone();
                            let handle_row = handle_row.clone();
                            let handle_delete = handle_delete.clone();
                            move || vm.categories.get().into_iter().enumerate().map(|(index, row)| {
                                let handle_row = handle_row.clone();
                                let handle_delete = handle_delete.clone();
                                let title = row.title.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| handle_row(index)>
                                        <td class="table__cell">
                                            <span
                                                class="category-swatch"
                                                style=format!("display: inline-block; width: 16px; height: 16px; border-radius: 4px; background: {};", row.color)
                                            ></span>
                                        </td>
                                        <td class="table__cell">{row.title}</td>
                                        <td class="table__cell">
                                            <Show when=move || !is_selection>
                                                {
                                                    let handle_delete = handle_delete.clone();
                                                    let title = title.clone();
                                                    view! {
                                                        <button
                                                            class="button button--ghost"
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                handle_delete(index, title.clone());
                                                            }
                                                        >
                                                            {icon("delete")}
                                                        </button>
                                                    }
                                                }
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }
                    </tbody>
                </table>
            </div>

            <Modal>
                <CategoryDetails
                    vm=vm_view.clone()
                    on_close=Callback::new(move |_| modal.hide())
                />
            </Modal>
        </div>
    }
}
