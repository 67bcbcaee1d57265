pub mod cli;
pub mod config;
pub mod dtos;
pub mod error_messages;
pub mod errors;
pub mod models;
pub mod pages;
pub mod services;
pub mod state;
pub mod usecases;

pub use errors::{AppError, Result};
