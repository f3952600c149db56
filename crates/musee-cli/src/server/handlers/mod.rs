//! API request handlers.

mod artworks;
mod assistant;
mod catalog;

pub use artworks::*;
pub use assistant::*;
pub use catalog::*;
