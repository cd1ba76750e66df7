pub mod profile;
pub mod upload;
