pub mod domains;
pub mod profile;
