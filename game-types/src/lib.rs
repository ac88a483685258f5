pub mod documents;
pub mod errors;
pub mod game;
pub mod log;
pub mod player;

// Re-export all types
pub use documents::*;
pub use errors::*;
pub use game::*;
pub use log::*;
pub use player::*;

pub type GameId = uuid::Uuid;
pub type PlayerId = uuid::Uuid;
