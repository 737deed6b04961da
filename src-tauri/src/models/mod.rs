// Data models (structs)
pub mod outcome;
pub mod target;

pub use outcome::*;
pub use target::*;
