pub mod config;
pub mod display;
pub mod errors;
pub mod parse;
pub mod runner;
pub mod types;
