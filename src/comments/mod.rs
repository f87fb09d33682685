// src/comments/mod.rs

pub mod validators;


pub use validators::*;
