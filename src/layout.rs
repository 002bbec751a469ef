//! Layout module for tracking UI component regions
//!
//! Rendering records where the combobox parts ended up on screen in
//! `LayoutRegions`, and `region_at()` maps a pointer position back to the
//! part under it.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region, TagRegion};
