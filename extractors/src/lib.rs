//! Extractors Crate
//!
//! This crate turns free-form answers from the generative-text service into
//! the structured shapes the client consumes. It is pure: no I/O, no async,
//! no shared state, so it can be called from any number of concurrent
//! requests without coordination.
//!
//! # Architecture
//!
//! - **Types**: `StructuredResult` and `Record` live in the `shared-types`
//!   crate
//! - **Implementations**: classification and pipe-table extraction live here
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::shape_response;
//!
//! let result = shape_response("Image ID | Latitude\nimg001 | 12.5");
//! assert!(result.records.is_some());
//! ```

pub mod response_shape;

// Re-export commonly used functions
pub use response_shape::{extract_records, normalize_column_name, shape_response};
