//! Firebase web-app configuration delivery

pub mod handlers;

pub use handlers::*;
