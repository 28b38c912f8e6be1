//! Network Interface Blocks: per-entity mirror records and their canonical map.

pub mod error;
mod nib;
mod nib_map;


pub use error::NibError;
pub use nib::{Nib, NibDirection, NibMode};
pub use nib_map::NibMap;
