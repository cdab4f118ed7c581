//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the focus pipeline and its
//! external collaborators.

mod pixel_source;
mod report;

pub use pixel_source::PixelSource;
pub use report::VerdictReport;
