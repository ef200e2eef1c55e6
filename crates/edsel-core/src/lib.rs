//! # edsel-core - Core Domain Types
//!
//! Foundation crate for edsel. Provides the editor record type, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`EditorRecord`] - A named editor definition (path, description, options)
//! - [`fold_name()`] - Case-insensitive key for editor names
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum covering registry, storage, and launch failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use edsel_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout the edsel crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{fold_name, EditorRecord};
