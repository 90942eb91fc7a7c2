pub mod extract;
pub mod models;
