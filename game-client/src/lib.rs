pub mod config;
pub mod dictionary;
pub mod identity;
pub mod overlay;
pub mod session;
pub mod supplier;

pub use config::Config;
pub use dictionary::{DefinitionLookup, DictionaryApi, LookupError};
pub use identity::{MemorySessionStore, SessionStore};
pub use overlay::TentativeOverlay;
pub use session::{GameSession, SessionError};
pub use supplier::{DatamuseSupplier, OfflineSupplier, WordSupplier};
