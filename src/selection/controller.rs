use crate::types::{ServiceId, SubCategoryId};

/// The user's current filter pair. Starts fully unselected; `sub_category`
/// is only ever meaningful while `service` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub service: Option<ServiceId>,
    pub sub_category: Option<SubCategoryId>,
}

/// Owns the filter pair for one UI session.
///
/// Pass a reference to whichever views need it; there is no global instance.
/// Both transitions are synchronous and infallible — identifiers are accepted
/// even when no loaded record carries them, since validity is a presentation
/// concern.
#[derive(Debug, Default)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_service(&self) -> Option<&ServiceId> {
        self.selection.service.as_ref()
    }

    pub fn selected_sub_category(&self) -> Option<&SubCategoryId> {
        self.selection.sub_category.as_ref()
    }

    /// Select a service, or clear it with `None`. Always resets the
    /// sub-category in the same update: a stale sub-category must never
    /// survive a service change.
    pub fn select_service(&mut self, id: Option<ServiceId>) {
        self.selection.service = id;
        self.selection.sub_category = None;
    }

    /// Select a sub-category within the current service, or clear it.
    /// Leaves the service untouched.
    pub fn select_sub_category(&mut self, id: Option<SubCategoryId>) {
        self.selection.sub_category = id;
    }
}
