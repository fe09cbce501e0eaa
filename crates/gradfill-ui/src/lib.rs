//! Gradfill UI — gradient fill controls for the host component framework.
//!
//! Two controls implement [`StandardControl`]:
//!
//! - [`GradientFill`] renders a rectangle or circle filled with a linear or
//!   radial gradient built from the bound color-stop data set.
//! - [`RadialGradientFill`] sets up the same containers and placeholder but
//!   does not react to updates yet.
//!
//! # Quick start
//!
//! ```rust
//! use gradfill_ui::prelude::*;
//!
//! let mut session = Session::new(GradientFill::new());
//! let mut ctx = Context::default();
//! session.mount(&mut ctx);
//!
//! ctx.parameters.control_width = Some(Property::new(200.0));
//! ctx.parameters.control_height = Some(Property::new(100.0));
//! ctx.parameters.gradient_data_set = DataSet::from_records([
//!     ("1", Record::new().with("offset", "0").with("color", "navy")),
//!     ("2", Record::new().with("offset", "100").with("color", "gold")),
//! ]);
//! session.update(&ctx);
//!
//! assert!(session.markup().contains(r#"stop-color="gold""#));
//! ```

pub mod controls;
pub mod error;
pub mod markup;
pub mod params;
pub mod stops;

pub use controls::{GradientFill, RadialGradientFill};
pub use gradfill_engine::control::StandardControl;

/// Everything needed to host and drive a control.
pub mod prelude {
    pub use crate::controls::{GradientFill, RadialGradientFill};
    pub use crate::error::StopError;
    pub use crate::params::{ControlParams, GradientKind, Shape, UnknownVariant};

    pub use gradfill_engine::control::{NoOutputs, OutputNotifier, StandardControl};
    pub use gradfill_engine::dom::{Element, ElementRef};
    pub use gradfill_engine::host::{Context, DataSet, Mode, Parameters, Property, Record};
    pub use gradfill_engine::id::ControlId;
    pub use gradfill_engine::session::{Phase, Session};

    pub use gradfill_svg::Svg;
}
