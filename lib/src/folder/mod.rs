//! Folder related endpoints

pub mod create;
pub mod list;

/// Path of the root folder, as expected by the listing endpoint
pub const ROOT: &str = "";
