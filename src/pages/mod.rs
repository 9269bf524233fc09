//! Route-level page components.
//!
//! Login forms and data pages are supplied by the feature crates; these pages
//! only cover the landing points the gates redirect to and from.

pub mod landing;
pub mod login;
