//! The currently displayed design and upload dialog state.
//!
//! Any successful detail fetch or upload replaces `current` outright; the
//! last response to arrive wins.

#[cfg(test)]
#[path = "design_test.rs"]
mod design_test;

use crate::net::types::DesignResult;
use crate::util::upload::{self, UploadRejection};

#[derive(Clone, Debug, Default)]
pub struct DesignState {
    pub current: Option<DesignResult>,
    /// Name of the file picked in the upload dialog.
    pub selected_file: Option<String>,
    pub upload_message: String,
    /// Percent of the upload sent so far.
    pub upload_progress: f64,
}

impl DesignState {
    /// Replace the displayed design and clear the upload dialog.
    pub fn display(&mut self, design: DesignResult) {
        self.current = Some(design);
        self.selected_file = None;
        self.upload_progress = 0.0;
    }

    /// Record a file selection and run the pre-flight checks.
    pub fn select_file(&mut self, name: &str, size: f64) -> Result<(), UploadRejection> {
        self.selected_file = Some(name.to_owned());
        match upload::validate_upload(name, size) {
            Ok(()) => {
                self.upload_message.clear();
                Ok(())
            }
            Err(rejection) => {
                self.upload_message = rejection.message().to_owned();
                Err(rejection)
            }
        }
    }

    pub fn progress_visible(&self) -> bool {
        upload::progress_visible(self.upload_progress)
    }

    /// Label on the file chooser.
    pub fn file_label(&self) -> &str {
        self.selected_file.as_deref().unwrap_or("Choose file")
    }
}
