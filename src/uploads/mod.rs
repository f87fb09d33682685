// src/uploads/mod.rs

pub mod validators;


pub use validators::{validate_file_upload, FileUploadConfig};
