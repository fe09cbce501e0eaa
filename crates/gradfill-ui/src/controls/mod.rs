//! Hosted controls.

mod frame;
mod gradient_fill;
mod radial_gradient_fill;

pub use gradient_fill::GradientFill;
pub use radial_gradient_fill::RadialGradientFill;

/// Class of the element each control appends to the host container.
pub const MAIN_CONTAINER_CLASS: &str = "main-container";
/// Class (and element id) of the element whose markup is replaced on render.
pub const SVG_CONTAINER_CLASS: &str = "svg-container";
