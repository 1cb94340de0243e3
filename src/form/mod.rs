pub mod controller;
pub mod fields;

pub use controller::{Origin, Preview, preview};
