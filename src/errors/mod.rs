//! Error types for the front end.
//!
//! This module defines the diagnostics recorded while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of syntax problem
//! - Error names and suggestions used when rendering to the user

pub mod errors;
