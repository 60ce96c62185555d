//! Password construction and rating.

pub mod builder;
pub mod charset;
pub mod strength;

pub use builder::GenerationRequest;
pub use builder::build;
pub use charset::CharClass;
pub use strength::Strength;
