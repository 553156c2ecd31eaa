pub mod api;
pub mod cli;
pub mod error;
pub mod github;
pub mod health;
pub mod models;
pub mod service;
pub mod sort;
pub mod types;
