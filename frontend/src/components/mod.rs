pub mod admin_dashboard;
pub mod header;
pub mod map;
pub mod profile_details;
pub mod profile_list;
pub mod status;
