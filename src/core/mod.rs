//! Cross-cutting pieces shared by the rest of the crate

pub mod config;
