pub mod icons;
pub mod page;
pub mod summary;
