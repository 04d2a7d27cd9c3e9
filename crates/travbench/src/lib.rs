pub mod bench;
pub mod error;
pub mod input;
pub mod report;

pub use error::Error;
