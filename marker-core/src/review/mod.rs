//! Review orchestration
//!
//! The reviewer composes the cloned homework path and the requirements
//! document into a review prompt and hands the raw agent output back to the
//! caller. The review content itself is opaque markdown written by the agent
//! and is never parsed here.

mod request;
mod reviewer;

pub use request::ReviewRequest;
pub use reviewer::Reviewer;
