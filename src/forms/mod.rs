//! Request parsing and validation for HTTP inputs.

pub mod catalog;
