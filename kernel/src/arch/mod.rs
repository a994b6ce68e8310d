//! Architecture-specific code
//!
//! This module contains all architecture-dependent implementations.
//! Currently only x86_64 is supported.

pub mod x86_64;
