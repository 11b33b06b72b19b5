//! Bill estimation endpoint and official-bill placeholders

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
