pub mod convert;
pub mod error;
pub mod field;
pub mod grid;
pub mod logging;
pub mod read;
pub mod sample;
pub mod vti;
pub mod write;

pub use error::{Error, Result};
