//! Focus QA Core - blur/dark classification of still images.
//!
//! This crate contains the focus-metric pipeline and the ports through which
//! it reads images and reports verdicts:
//! - Channel extraction from a [`PixelSource`]
//! - Weighted luminance conversion
//! - Sliding-window filtering, variance and threshold classification
//!
//! `PixelSource` is implemented for the `image` crate's `RgbImage`,
//! `RgbaImage` and `DynamicImage`, so decoded images can be analyzed directly.

pub mod domain;
pub mod pipeline;
pub mod ports;
mod raster;

pub use domain::{
    ChannelGrid, ChannelGrids, ClassificationResult, FocusError, LuminanceSequence, Result,
};
pub use pipeline::{
    classify, detect, detect_and_report, extract_channels, focus_metric, to_luminance,
    FocusClassifier, DEFAULT_FOCUS_THRESHOLD, FILTER_KERNEL,
};
pub use ports::{PixelSource, VerdictReport};
