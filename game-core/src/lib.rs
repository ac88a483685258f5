pub mod board;
pub mod clue;
pub mod eligibility;
pub mod resolver;
pub mod scoring;
pub mod shuffle;
pub mod words;

// Re-export main components
pub use board::*;
pub use clue::*;
pub use eligibility::*;
pub use resolver::*;
pub use scoring::*;
pub use shuffle::*;
pub use words::*;
