pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod shutdown;
pub mod stream;
pub mod ui;
pub mod usecase;
