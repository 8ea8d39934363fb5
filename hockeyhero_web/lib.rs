pub mod handlers;
mod alerts;
mod http;
mod problem;

pub use http::*;
