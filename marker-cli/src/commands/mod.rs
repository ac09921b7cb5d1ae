//! CLI command implementations

pub mod clean;
pub mod info;
pub mod review;

pub use clean::CleanArgs;
pub use info::InfoArgs;
pub use review::ReviewArgs;
