pub mod documents;
pub mod feed;
pub mod join_code;
pub mod memory;
pub mod store;

// Re-export main components
pub use documents::*;
pub use feed::*;
pub use join_code::*;
pub use memory::*;
pub use store::*;
