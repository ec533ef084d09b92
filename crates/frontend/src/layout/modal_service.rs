use crate::domain::a001_category::ui::list::{CategoryListVm, CategoryNavigator};
use leptos::prelude::*;

/// Centralized visibility of the screen's modal editor
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    /// Show the modal
    pub fn show(&self) {
        self.is_visible.set(true);
    }

    /// Hide the modal
    pub fn hide(&self) {
        self.is_visible.set(false);
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// The editor rendered inside `<Modal>` is bound to the same view-model by
/// the list component, so presenting it only flips visibility.
impl CategoryNavigator for ModalService {
    fn show_edit_category_view(&self, _vm: &CategoryListVm) {
        self.show();
    }
}

/// Modal overlay.
/// Usage:
/// ```rust,ignore
/// let modal = ModalService::new();
/// provide_context(modal);
///
/// view! {
///     <Modal>
///         <MyComponent />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        {move || {
            if modal.is_visible.get() {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| modal.hide()
                    >
                        <div
                            class="modal-content"
                            on:click=|e| e.stop_propagation()
                        >
                            {children()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_hide() {
        let modal = ModalService::new();
        assert!(!modal.is_visible.get_untracked());

        modal.show();
        assert!(modal.is_visible.get_untracked());

        modal.hide();
        assert!(!modal.is_visible.get_untracked());
    }
}
