use crate::domain::a001_category::ui::list::FeedbackCategorySink;
use contracts::domain::a001_category::aggregate::CategoryRecord;
use leptos::prelude::*;

/// ViewModel for the category field of the feedback form
#[derive(Clone, Copy)]
pub struct FeedbackDetailsVm {
    pub category: RwSignal<Option<CategoryRecord>>,
    pub picking: RwSignal<bool>,
}

impl FeedbackDetailsVm {
    pub fn new() -> Self {
        Self {
            category: RwSignal::new(None),
            picking: RwSignal::new(false),
        }
    }

    /// Title of the linked category, empty when none is linked
    pub fn category_title(&self) -> Signal<String> {
        let category = self.category;
        Signal::derive(move || category.get().map(|c| c.title).unwrap_or_default())
    }

    pub fn open_picker(&self) {
        self.picking.set(true);
    }

    pub fn close_picker(&self) {
        self.picking.set(false);
    }
}

impl Default for FeedbackDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackCategorySink for FeedbackDetailsVm {
    fn publish_category(&self, category: CategoryRecord) {
        log::debug!("Feedback category set to '{}'", category.title);
        self.category.try_set(Some(category));
        self.picking.try_set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_links_category_and_closes_picker() {
        let vm = FeedbackDetailsVm::new();
        vm.open_picker();

        vm.publish_category(CategoryRecord::new("Bug", "#FF0000"));

        assert_eq!(
            vm.category.get_untracked(),
            Some(CategoryRecord::new("Bug", "#FF0000"))
        );
        assert!(!vm.picking.get_untracked());
    }
}
