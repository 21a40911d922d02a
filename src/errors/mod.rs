//! Error types and error collection for the front end.
//!
//! This module defines the errors reported while parsing. It includes:
//!
//! - Error structures with source position information
//! - The error variants the parser can report
//! - The ordered diagnostics sink the parser appends to
//! - Names and tips used when rendering errors for users

pub mod diagnostics;
pub mod errors;
