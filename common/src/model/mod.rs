pub mod draft;
pub mod filter;
pub mod profile;
