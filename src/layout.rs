//! Layout module for tracking UI component regions
//!
//! The `LayoutRegions` struct records where fields and suggestion dropdowns
//! were rendered, and `region_at()` resolves a screen position back to the
//! component under it for mouse interactions.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, PopupRegion, Region};
