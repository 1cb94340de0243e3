pub mod api;
pub mod appstate;
pub mod command;
pub mod config;
pub mod form;
