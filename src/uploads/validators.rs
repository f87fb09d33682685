// src/uploads/validators.rs

use crate::common::FieldResult;

// ============================================================================
// File Upload Validators
// ============================================================================

/// Executable extensions rejected even when the caller allow-lists them.
const EXECUTABLE_EXTENSIONS: [&str; 9] = [
    "exe", "bat", "cmd", "com", "scr", "pif", "vbs", "js", "jar",
];

const DEFAULT_ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

const DEFAULT_MAX_SIZE_BYTES: u64 = 2 * 1024 * 1024;

/// Caller-tunable upload limits. The executable denylist is fixed.
#[derive(Debug, Clone)]
pub struct FileUploadConfig {
    pub allowed_extensions: Vec<String>,
    pub max_size_bytes: u64,
}

impl Default for FileUploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }
}

impl FileUploadConfig {
    pub fn with_max_size_bytes(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = max_size_bytes;
        self
    }

    pub fn with_allowed_extensions(mut self, extensions: &[&str]) -> Self {
        self.allowed_extensions = extensions.iter().map(|ext| ext.to_lowercase()).collect();
        self
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_lowercase())
}

/// Validate a selected file by name and size. Content inspection (magic
/// bytes, real MIME type) happens server-side on the actual upload.
pub fn validate_file_upload(file_name: &str, size_bytes: u64, config: &FileUploadConfig) -> FieldResult {
    let trimmed = file_name.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid("Please select a file");
    }

    let Some(extension) = extension_of(trimmed) else {
        return FieldResult::invalid("File must have an extension");
    };

    if !config
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
    {
        return FieldResult::invalid(format!(
            "File type .{} is not allowed. Allowed types: {}",
            extension,
            config.allowed_extensions.join(", ")
        ));
    }

    if size_bytes > config.max_size_bytes {
        let limit_mb = config.max_size_bytes as f64 / (1024.0 * 1024.0);
        return FieldResult::invalid(format!("File size exceeds the {:.0} MB limit", limit_mb));
    }

    // Checked last so an allow-listed "exe" still cannot slip through
    if EXECUTABLE_EXTENSIONS.contains(&extension.as_str()) {
        return FieldResult::invalid("Executable files are not allowed");
    }

    FieldResult::valid(trimmed)
}
