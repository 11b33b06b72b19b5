//! Daily meter-reading placeholder routes

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
