// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing mode and fragment source implementations.
//!
//! This module contains concrete implementations of the traits defined in the ports
//! layer.

#[cfg(feature = "env")]
pub mod env_var;
pub mod fixed;
pub mod memory;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvModeAdapter;
pub use fixed::FixedModeAdapter;
pub use memory::MemoryFragmentSource;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFragmentAdapter, YamlFragmentParser};
