//! Domain model shared by the profile directory crates.

pub mod model;
pub mod requests;
