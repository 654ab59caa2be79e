//! Domain entities and value objects independent of persistence.

pub mod catalog;
pub mod category;
pub mod description;
pub mod photo;
pub mod product;
pub mod types;
