//! Keyboard layouts on the 3x10 main block.
//!
//! A layout is a 30-character string read row by row (top, home, bottom),
//! ten columns each, with `~` marking an unused key. Layouts are extracted
//! from JSON descriptors listing individual key placements.

/// JSON layout descriptors.
pub mod descriptor;

/// Reconstructed 30-key layouts.
pub mod grid;

/// Directory extraction into a name -> layout mapping.
pub mod extract;

pub use descriptor::{KeyPlacement, LayoutDescriptor};
pub use extract::{LayoutSet, extract_layout, extract_layouts, read_layouts};
pub use grid::Layout;
