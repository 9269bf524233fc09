//! Identity payloads handed to the client by the venue API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetching happens in the auth providers; this crate only consumes the
//! resulting shapes.

pub mod types;
