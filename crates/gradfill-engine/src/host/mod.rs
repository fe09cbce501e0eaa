//! Host-supplied inputs.
//!
//! The host hands every lifecycle call a [`Context`]: the manifest-declared
//! property bag plus the bound color-stop [`DataSet`]. Every property may be
//! absent, or present with a null raw value; controls decide what absence
//! means. All types deserialize from the host's JSON shape.

mod context;
mod dataset;

pub use context::{Context, Mode, Parameters, Property};
pub use dataset::{DataSet, Record};
