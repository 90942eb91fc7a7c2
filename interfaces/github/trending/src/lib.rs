//! Raw access to the public GitHub trending page.
//!
//! The page is plain HTML, so this crate only returns the body text;
//! parsing lives with the consumer.

pub mod index;
