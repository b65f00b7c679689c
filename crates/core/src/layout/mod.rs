//! Line layout around floating objects.
//!
//! This module contains:
//! - Line parameters (`LineBoundingBox`) and drawing types
//! - Resolution of a drawing into a horizontal obstruction (`split`)
//! - Reduction of obstructions into divides (`divide`)
//! - Line assembly and the content helpers (`line`)
//! - Block anchor bookkeeping (`anchor`)

pub mod anchor;
pub mod divide;
pub mod drawing;
pub mod line;
pub mod params;
pub mod split;

pub use anchor::*;
pub use divide::*;
pub use drawing::*;
pub use line::*;
pub use params::*;
pub use split::*;
