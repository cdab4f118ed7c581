//! Core domain types for focus classification.

mod error;
mod grid;
mod result;

pub use error::{FocusError, Result};
pub use grid::{ChannelGrid, ChannelGrids, LuminanceSequence};
pub use result::ClassificationResult;
