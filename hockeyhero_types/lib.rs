pub mod errors;
pub mod models;
pub mod patch;

pub use errors::Result;
