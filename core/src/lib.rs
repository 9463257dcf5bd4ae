// ClaidCut - Core Library

pub mod encoding;
pub mod models;
pub mod validation;

pub use encoding::*;
pub use models::*;
pub use validation::*;
