//! ViewModel for the category list screen
//!
//! Owns the published category list, the draft under edit and the selection
//! pointer. Every state change goes through a `RwSignal`, so all mutations
//! happen on the single UI event loop. Continuations that run after an API
//! call use the `try_*` signal accessors: once the view-model is disposed they
//! drop their result instead of touching released state.

use super::model::{ApiError, CategoryApi};
use contracts::domain::a001_category::aggregate::CategoryRecord;
use leptos::prelude::*;
use std::sync::{Arc, Weak};
use thiserror::Error;

/// Errors surfaced by category operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("changes not saved: {0}")]
    NetworkFailure(#[from] ApiError),

    #[error("malformed server response: {0}")]
    MalformedResponse(String),

    #[error("category index {index} is out of range (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A 2xx answer with a body that does not decode still means the server
/// applied the request. Only transport and status errors are failures.
fn accept_undecodable<T: Default>(
    action: &str,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    match result {
        Err(ApiError::Decode(msg)) => {
            log::warn!(
                "Category {} succeeded: {}",
                action,
                CategoryError::MalformedResponse(msg)
            );
            Ok(T::default())
        }
        other => other,
    }
}

fn same_record(a: &CategoryRecord, b: &CategoryRecord) -> bool {
    if a.is_persisted() && b.is_persisted() {
        a.id == b.id
    } else {
        a == b
    }
}

/// Slot right after the last record that preceded the deleted one and is
/// still in the list, or the head when none of them survived.
fn restore_position(list: &[CategoryRecord], before: &[CategoryRecord]) -> usize {
    before
        .iter()
        .rev()
        .find_map(|prev| list.iter().rposition(|r| same_record(r, prev)))
        .map_or(0, |at| at + 1)
}

/// Presents the edit screen bound to a list view-model
pub trait CategoryNavigator: Send + Sync {
    fn show_edit_category_view(&self, vm: &CategoryListVm);
}

/// Receives the category picked in selection mode
pub trait FeedbackCategorySink: Send + Sync {
    fn publish_category(&self, category: CategoryRecord);
}

#[derive(Clone)]
pub struct CategoryListVm {
    // === Output ===
    pub categories: RwSignal<Vec<CategoryRecord>>,

    // === Input ===
    pub title_input: RwSignal<String>,
    pub color_input: RwSignal<String>,

    // === Edit state ===
    pub draft: RwSignal<CategoryRecord>,
    pub selected_index: RwSignal<Option<usize>>,

    // === UI state ===
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    is_selection: bool,
    api: Arc<dyn CategoryApi>,
    navigator: Arc<dyn CategoryNavigator>,
    feedback: Option<Weak<dyn FeedbackCategorySink>>,
}

impl CategoryListVm {
    /// ViewModel for managing categories
    pub fn new(api: Arc<dyn CategoryApi>, navigator: Arc<dyn CategoryNavigator>) -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
            title_input: RwSignal::new(String::new()),
            color_input: RwSignal::new(String::new()),
            draft: RwSignal::new(CategoryRecord::default()),
            selected_index: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            is_selection: false,
            api,
            navigator,
            feedback: None,
        }
    }

    /// ViewModel for picking a category for a feedback form.
    ///
    /// Only a weak reference to the form is kept.
    pub fn for_selection(
        api: Arc<dyn CategoryApi>,
        navigator: Arc<dyn CategoryNavigator>,
        feedback: &Arc<dyn FeedbackCategorySink>,
    ) -> Self {
        Self {
            is_selection: true,
            feedback: Some(Arc::downgrade(feedback)),
            ..Self::new(api, navigator)
        }
    }

    pub fn is_selection(&self) -> bool {
        self.is_selection
    }

    /// Start the initial load on the local executor
    pub fn start(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = this.fetch_all_categories().await;
        });
    }

    /// Release every signal owned by this view-model
    pub fn dispose(self) {
        self.categories.dispose();
        self.title_input.dispose();
        self.color_input.dispose();
        self.draft.dispose();
        self.selected_index.dispose();
        self.loading.dispose();
        self.error.dispose();
    }

    // === Draft inputs ===

    pub fn on_title_input(&self, value: String) {
        if self.title_input.try_set(value).is_some() {
            log::debug!("Category view model disposed, title input ignored");
            return;
        }
        self.merge_inputs();
    }

    pub fn on_color_input(&self, value: String) {
        if self.color_input.try_set(value).is_some() {
            log::debug!("Category view model disposed, color input ignored");
            return;
        }
        self.merge_inputs();
    }

    /// Overwrite the draft's title and color with the latest input pair
    fn merge_inputs(&self) {
        let (Some(title), Some(color)) = (
            self.title_input.try_get_untracked(),
            self.color_input.try_get_untracked(),
        ) else {
            return;
        };

        self.draft.try_update(|draft| {
            draft.title = title;
            draft.color = color;
        });
    }

    fn seed_inputs(&self, record: &CategoryRecord) {
        self.title_input.set(record.title.clone());
        self.color_input.set(record.color.clone());
    }

    fn record_at(&self, index: usize) -> Result<CategoryRecord, CategoryError> {
        self.categories.with_untracked(|list| {
            list.get(index)
                .cloned()
                .ok_or(CategoryError::IndexOutOfRange {
                    index,
                    len: list.len(),
                })
        })
    }

    /// Log the failure, surface it to the screen and hand it back
    fn fail(&self, action: &str, error: CategoryError) -> CategoryError {
        log::error!("Failed to {} category: {}", action, error);
        self.error.try_set(Some(error.to_string()));
        error
    }

    // === Navigation ===

    pub fn begin_add(&self) {
        log::info!("Opening category editor for a new category");
        self.selected_index.set(None);

        let fresh = CategoryRecord::default();
        self.seed_inputs(&fresh);
        self.draft.set(fresh);

        self.navigator.show_edit_category_view(self);
    }

    pub fn begin_modify(&self, index: usize) -> Result<(), CategoryError> {
        let record = self.record_at(index)?;
        log::info!("Opening category editor for '{}'", record.title);

        self.selected_index.set(Some(index));
        self.seed_inputs(&record);
        self.draft.set(record);

        self.navigator.show_edit_category_view(self);
        Ok(())
    }

    /// Mark the row picked in selection mode
    pub fn mark_selection(&self, index: usize) -> Result<(), CategoryError> {
        self.record_at(index)?;
        self.selected_index.set(Some(index));
        Ok(())
    }

    // === Commands ===

    /// Create the draft on the server, then append it.
    ///
    /// The list only grows once the server has confirmed the record, so the
    /// id it assigns ends up in the local copy.
    pub async fn add_category(&self) -> Result<(), CategoryError> {
        let mut record = self.draft.get_untracked();
        log::info!("Adding category '{}'", record.title);

        let result = self.api.add_category(record.to_map()).await;
        let response = match accept_undecodable("add", result) {
            Ok(response) => response,
            Err(e) => return Err(self.fail("add", e.into())),
        };
        log::debug!("Category added: {}", response.message());

        if let Some(id) = response.assigned_id() {
            record.id = id;
            self.draft.try_update(|draft| draft.id = id);
        }

        if self
            .categories
            .try_update(|list| list.push(record))
            .is_none()
        {
            log::debug!("Category view model disposed, added category not shown");
            return Ok(());
        }
        self.error.try_set(None);
        Ok(())
    }

    /// Save the draft over the selected record.
    ///
    /// The list is updated before the server answers; a failed request puts
    /// the previous record back. Without a selection only the request is sent.
    pub async fn mod_category(&self) -> Result<(), CategoryError> {
        let selected = self.selected_index.get_untracked();
        if let Some(index) = selected {
            self.record_at(index)?;
        }

        let record = self.draft.get_untracked();
        log::info!("Modifying category {} '{}'", record.id, record.title);

        let mut previous = None;
        if let Some(index) = selected {
            self.categories.update(|list| {
                if let Some(slot) = list.get_mut(index) {
                    previous = Some((index, std::mem::replace(slot, record.clone())));
                }
            });
        }

        let result = self
            .api
            .mod_category(record.to_map(), record.id_string())
            .await;
        match accept_undecodable("modify", result) {
            Ok(()) => {
                self.error.try_set(None);
                Ok(())
            }
            Err(e) => {
                if let Some((index, old)) = previous {
                    self.categories.try_update(|list| {
                        if let Some(slot) = list.get_mut(index) {
                            if *slot == record {
                                *slot = old;
                            }
                        }
                    });
                }
                Err(self.fail("modify", e.into()))
            }
        }
    }

    /// Remove the record at `index`, restoring it if the server refuses
    pub async fn del_category(&self, index: usize) -> Result<(), CategoryError> {
        let record = self.record_at(index)?;
        log::info!("Deleting category {} '{}'", record.id, record.title);

        self.draft.set(record.clone());
        let mut before = Vec::new();
        self.categories.update(|list| {
            before = list[..index].to_vec();
            list.remove(index);
        });

        let result = self.api.del_category(record.id_string()).await;
        match accept_undecodable("delete", result) {
            Ok(response) => {
                log::debug!("Category deleted: {}", response.message());
                self.error.try_set(None);
                Ok(())
            }
            Err(e) => {
                self.categories.try_update(|list| {
                    let at = restore_position(list, &before);
                    list.insert(at, record);
                });
                Err(self.fail("delete", e.into()))
            }
        }
    }

    /// Finish selection mode: hand the marked record to the feedback form.
    ///
    /// Falls back to the first record when nothing was marked.
    pub fn select_category(&self) -> Result<CategoryRecord, CategoryError> {
        let index = self.selected_index.get_untracked().unwrap_or(0);
        let record = self.record_at(index)?;
        log::info!("Category '{}' selected", record.title);

        self.draft.set(record.clone());
        match self.feedback.as_ref().and_then(Weak::upgrade) {
            Some(feedback) => feedback.publish_category(record.clone()),
            None => log::debug!("No feedback form linked, selection not published"),
        }
        Ok(record)
    }

    // === Data loading ===

    /// Load the server's categories and append them in server order.
    ///
    /// Returns how many records were appended. Entries with missing or
    /// wrong-typed fields are kept with default values.
    pub async fn fetch_all_categories(&self) -> Result<usize, CategoryError> {
        log::info!("Requesting category list");
        self.loading.set(true);

        let result = accept_undecodable("load", self.api.get_categories().await);
        if self.loading.try_set(false).is_some() {
            log::debug!("Category view model disposed, category list dropped");
            return Ok(0);
        }

        let envelope = match result {
            Ok(envelope) => envelope,
            Err(e) => return Err(self.fail("load", e.into())),
        };

        let Some(entries) = envelope.entries() else {
            log::warn!("Category list response carries no entries: {:?}", envelope.data);
            return Ok(0);
        };

        let fetched: Vec<CategoryRecord> = entries
            .iter()
            .map(CategoryRecord::from_server_entry)
            .collect();
        let count = fetched.len();

        self.categories.try_update(|list| list.extend(fetched));
        self.error.try_set(None);
        Ok(count)
    }
}
