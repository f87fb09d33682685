// src/tasks/mod.rs

pub mod validators;


pub use validators::*;
