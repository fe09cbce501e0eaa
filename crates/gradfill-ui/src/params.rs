use std::fmt;
use std::str::FromStr;

use gradfill_engine::host::Parameters;

// ── Enumerated parameters ─────────────────────────────────────────────────

/// Geometric primitive that receives the gradient fill.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Shape {
    #[default]
    Rectangle,
    Circle,
}

impl FromStr for Shape {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rectangle" => Ok(Shape::Rectangle),
            "Circle" => Ok(Shape::Circle),
            other => Err(UnknownVariant::new("shape", other)),
        }
    }
}

/// Kind of gradient definition emitted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

impl FromStr for GradientKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linear" => Ok(GradientKind::Linear),
            "Radial" => Ok(GradientKind::Radial),
            other => Err(UnknownVariant::new("gradient", other)),
        }
    }
}

/// A host string that does not name any variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub parameter: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(parameter: &'static str, value: &str) -> Self {
        Self { parameter, value: value.to_string() }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value '{}'", self.parameter, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

// ── ControlParams ─────────────────────────────────────────────────────────

/// Last-known parameter values of one control instance.
///
/// Each field is `None` until the host first delivers a non-null value, and
/// then keeps the most recent one. Partial updates (a resize that carries
/// only the size, say) never reset the other fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlParams {
    pub rotation: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub offset_start: Option<f64>,
    pub offset_end: Option<f64>,
    pub shape: Option<Shape>,
    pub gradient: Option<GradientKind>,
}

impl ControlParams {
    /// Merges every present, non-null property of `params` into `self`.
    ///
    /// Unrecognized enum strings are logged and leave the cached value as is.
    pub fn merge_from(&mut self, params: &Parameters) {
        merge(&mut self.rotation, params.rotation());
        merge(&mut self.width, params.control_width());
        merge(&mut self.height, params.control_height());
        merge(&mut self.offset_start, params.offset_start());
        merge(&mut self.offset_end, params.offset_end());
        merge(&mut self.shape, decode(params.shape()));
        merge(&mut self.gradient, decode(params.gradient()));
    }

    /// Rotation in degrees; `0` until set.
    pub fn rotation(&self) -> f64 { self.rotation.unwrap_or_default() }
    pub fn width(&self) -> f64 { self.width.unwrap_or_default() }
    pub fn height(&self) -> f64 { self.height.unwrap_or_default() }
    pub fn offset_start(&self) -> f64 { self.offset_start.unwrap_or_default() }
    pub fn offset_end(&self) -> f64 { self.offset_end.unwrap_or_default() }
    pub fn shape(&self) -> Shape { self.shape.unwrap_or_default() }
    pub fn gradient(&self) -> GradientKind { self.gradient.unwrap_or_default() }
}

fn merge<T>(slot: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *slot = incoming;
    }
}

fn decode<T: FromStr<Err = UnknownVariant>>(raw: Option<&str>) -> Option<T> {
    match raw?.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("{e}; keeping previous value");
            None
        }
    }
}
