pub mod config;
pub mod detector;
pub mod error;
pub mod models;
pub mod parsers;
pub mod scheduler;
pub mod telegram;
pub mod utils;
