// src/lib.rs
// Library crate for the Casebook service, exposed to integration tests

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validators;
