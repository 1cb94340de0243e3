pub mod builder;
pub mod request;

pub use builder::{PROGRAM, build_command, build_command_for};
pub use request::{Endpoint, Patterns, Settings, TransferRequest};
