// src/users/mod.rs

pub mod validators;


pub use validators::*;
