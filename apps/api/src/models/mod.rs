pub mod engagement;
pub mod internship;
pub mod profile;
