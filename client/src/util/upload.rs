//! Pre-flight checks for design uploads.
//!
//! A file is only sent when its extension is exactly `io` and it fits under
//! the upload ceiling; otherwise the dialog shows inline text and no request
//! goes out.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Largest accepted upload, in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadRejection {
    WrongExtension,
    TooLarge,
}

impl UploadRejection {
    pub fn message(self) -> &'static str {
        match self {
            UploadRejection::WrongExtension => "Please select a .io file.",
            UploadRejection::TooLarge => "Max upload size is 10 MB.",
        }
    }
}

/// Text after the last `.` in a file name, if any.
pub fn file_extension(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext).filter(|ext| !ext.is_empty())
}

/// Validate a selected file by name and size in bytes.
pub fn validate_upload(name: &str, size: f64) -> Result<(), UploadRejection> {
    if file_extension(name) != Some("io") {
        return Err(UploadRejection::WrongExtension);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(())
}

/// Percentage of bytes sent, clamped to `0..=100`.
pub fn progress_percent(loaded: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (loaded / total * 100.0).clamp(0.0, 100.0)
}

/// The bar is only shown while an upload is under way.
pub fn progress_visible(percent: f64) -> bool {
    percent > 0.0 && percent < 100.0
}
