//! Review API access and payload validation.

pub mod client;
pub mod response;

pub use client::{PracticumClient, ReviewSource};
pub use response::{decode, validate, ApiResponse, Submission, SubmissionRecord};
