//! Core library exports for the product catalog service.
//!
//! With only the `data` feature the crate exposes the domain, persistence
//! models, schema and repositories. The `server` feature adds the forms,
//! services and Actix-web routes behind `GET /ProductCatalog`.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
