//! Service layer for side effects outside the UI.
//!
//! The form wizard hands completed applications to this layer; the UI never
//! touches the filesystem directly.

pub mod submissions;

pub use submissions::SubmissionStore;
