//! Test support utilities for focus-qa.
//!
//! Provides mocks, synthetic image builders, and an in-memory writer for
//! testing the focus pipeline and its adapters.
//!
//! # Example
//!
//! ```
//! use focus_qa_core::detect;
//! use focus_qa_test_support::MockPixelSource;
//!
//! let image = MockPixelSource::uniform(4, 4, [100, 100, 100]);
//! let result = detect(&image, 3000.0).unwrap();
//! assert!(result.is_blurry);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{MockPixelSource, MockVerdictReport, SharedBuffer};
