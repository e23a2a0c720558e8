// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) through which the provider
//! obtains its inputs. These traits are implemented by adapters in the adapters layer.

pub mod fragments;
pub mod parser;
pub mod source;

// Re-export commonly used types
pub use fragments::FragmentSource;
pub use parser::FragmentParser;
pub use source::ModeSource;
