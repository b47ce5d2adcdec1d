// Application layer - use cases shared by the terminal UI and tests

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
