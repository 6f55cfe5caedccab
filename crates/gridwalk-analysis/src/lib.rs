//! Grid analyses built on gridwalk's flood fill.
//!
//! - [`trails`]: hiking trails on a digit height map (score and rating).
//! - [`regions`]: same-label regions with area, perimeter and side count.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod regions;
pub mod trails;

pub use regions::{bulk_fence_price, fence_price, regions, Region};
pub use trails::HeightMap;
