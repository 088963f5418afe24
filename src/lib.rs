pub mod app;
pub mod config;
pub mod drill;
pub mod error;
pub mod keys;
pub mod modes;
pub mod widgets;
