//! Reference server for the termcast site.
//!
//! Declares the site's route table ([`routes::draw`]) and serves it
//! through a minimal axum application that resolves every request to its
//! handler identity. Controllers themselves live elsewhere; this crate
//! only knows which (resource, action) pair would service a request.

pub mod app;
pub mod config;
pub mod routes;
