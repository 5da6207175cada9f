//! Detail modal state.
//!
//! Closing drops the project as well as the open flag, so a later open with
//! another project can never briefly render the previous one.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use listings::Project;
use listings::detail::DetailView;

#[derive(Clone, Debug, Default)]
pub struct DetailModalState {
    project: Option<Project>,
    open: bool,
}

impl DetailModalState {
    pub fn open(&mut self, project: Project) {
        self.project = Some(project);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.project = None;
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open && self.project.is_some()
    }

    #[must_use]
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// What the modal should render, or `None` to render nothing.
    #[must_use]
    pub fn view(&self) -> Option<DetailView> {
        if !self.open {
            return None;
        }
        self.project.as_ref().map(DetailView::of)
    }
}
