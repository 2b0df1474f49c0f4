pub mod app;
pub mod command;
pub mod config;
pub mod directory;
pub mod error;
pub mod event;
pub mod form;
pub mod input;
pub mod logging;
pub mod lookup;
pub mod picker;
pub mod ui;
