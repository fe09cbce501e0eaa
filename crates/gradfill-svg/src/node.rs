use std::fmt;

use crate::writer::{WriteSvg, XmlWriter};

/// SVG namespace emitted on the root element.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// ── Values ────────────────────────────────────────────────────────────────

/// A coordinate or length attribute value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Length {
    /// Percentage of the reference box (`50%`).
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Gradients are always laid out in absolute user-space coordinates.
const GRADIENT_UNITS: &str = "userSpaceOnUse";

/// A gradient transform. Only rotation about a point is needed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transform {
    /// `rotate(angle, cx, cy)`, angle in degrees.
    Rotate { angle: f64, cx: f64, cy: f64 },
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Rotate { angle, cx, cy } => write!(f, "rotate({angle}, {cx}, {cy})"),
        }
    }
}

/// Fill paint for a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Reference to a paint server (`url(#id)`).
    Server(String),
}

impl Paint {
    pub fn server(id: impl Into<String>) -> Self {
        Paint::Server(id.into())
    }

    /// The referenced definition id.
    pub fn server_id(&self) -> &str {
        match self {
            Paint::Server(id) => id,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Server(id) => write!(f, "url(#{id})"),
        }
    }
}

// ── Gradients ─────────────────────────────────────────────────────────────

/// One `<stop>` of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub offset: Length,
    /// Any CSS color string. Not interpreted.
    pub color: String,
}

impl Stop {
    pub fn new(offset: Length, color: impl Into<String>) -> Self {
        Self { offset, color: color.into() }
    }
}

/// `<linearGradient>` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub x1: Length,
    pub y1: Length,
    pub x2: Length,
    pub y2: Length,
    pub transform: Option<Transform>,
    pub stops: Vec<Stop>,
}

impl LinearGradient {
    /// A left-to-right gradient across the reference box with no stops.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x1: Length::Percent(0.0),
            y1: Length::Percent(0.0),
            x2: Length::Percent(100.0),
            y2: Length::Percent(0.0),
            transform: None,
            stops: Vec::new(),
        }
    }

    pub fn start(mut self, x: Length, y: Length) -> Self { self.x1 = x; self.y1 = y; self }
    pub fn end(mut self, x: Length, y: Length) -> Self { self.x2 = x; self.y2 = y; self }
    pub fn transform(mut self, t: Transform) -> Self { self.transform = Some(t); self }
    pub fn stop(mut self, stop: Stop) -> Self { self.stops.push(stop); self }
    pub fn stops(mut self, stops: impl IntoIterator<Item = Stop>) -> Self {
        self.stops.extend(stops);
        self
    }
}

/// `<radialGradient>` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub id: String,
    pub cx: Length,
    pub cy: Length,
    pub r: Length,
    pub fx: Length,
    pub fy: Length,
    pub transform: Option<Transform>,
    pub stops: Vec<Stop>,
}

impl RadialGradient {
    /// A centered gradient with radius 50% and no stops.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cx: Length::Percent(50.0),
            cy: Length::Percent(50.0),
            r: Length::Percent(50.0),
            fx: Length::Percent(50.0),
            fy: Length::Percent(50.0),
            transform: None,
            stops: Vec::new(),
        }
    }

    pub fn center(mut self, x: Length, y: Length) -> Self { self.cx = x; self.cy = y; self }
    pub fn focal(mut self, x: Length, y: Length) -> Self { self.fx = x; self.fy = y; self }
    pub fn radius(mut self, r: Length) -> Self { self.r = r; self }
    pub fn transform(mut self, t: Transform) -> Self { self.transform = Some(t); self }
    pub fn stop(mut self, stop: Stop) -> Self { self.stops.push(stop); self }
    pub fn stops(mut self, stops: impl IntoIterator<Item = Stop>) -> Self {
        self.stops.extend(stops);
        self
    }
}

/// A named gradient definition, placed inside `<defs>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Gradient {
    pub fn id(&self) -> &str {
        match self {
            Gradient::Linear(g) => &g.id,
            Gradient::Radial(g) => &g.id,
        }
    }

    pub fn stops(&self) -> &[Stop] {
        match self {
            Gradient::Linear(g) => &g.stops,
            Gradient::Radial(g) => &g.stops,
        }
    }
}

// ── Shapes ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Paint) -> Self {
        Self { x, y, width, height, fill }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Paint,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64, fill: Paint) -> Self {
        Self { cx, cy, r, fill }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
}

impl Shape {
    pub fn fill(&self) -> &Paint {
        match self {
            Shape::Rect(r) => &r.fill,
            Shape::Circle(c) => &c.fill,
        }
    }
}

// ── Containers ────────────────────────────────────────────────────────────

/// `viewBox` bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// `<defs>` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defs {
    pub gradients: Vec<Gradient>,
}

/// `<g>` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub shapes: Vec<Shape>,
}

/// Root `<svg>` canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Svg {
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
    pub defs: Defs,
    pub group: Group,
}

impl Svg {
    /// A canvas of `width × height` whose `viewBox` maps 1:1 onto it.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            view_box: ViewBox { min_x: 0.0, min_y: 0.0, width, height },
            defs: Defs::default(),
            group: Group::default(),
        }
    }

    pub fn gradient(mut self, gradient: Gradient) -> Self {
        self.defs.gradients.push(gradient);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.group.shapes.push(shape);
        self
    }

    /// Serializes the tree to SVG markup.
    pub fn to_markup(&self) -> String {
        let mut w = XmlWriter::new();
        self.write_svg(&mut w);
        w.finish()
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

// ── Serialization ─────────────────────────────────────────────────────────

impl WriteSvg for Svg {
    fn write_svg(&self, w: &mut XmlWriter) {
        w.start("svg");
        w.attr("xmlns", SVG_NS);
        w.attr("width", self.width);
        w.attr("height", self.height);
        w.attr("viewBox", self.view_box);
        self.defs.write_svg(w);
        self.group.write_svg(w);
        w.end();
    }
}

impl WriteSvg for Defs {
    fn write_svg(&self, w: &mut XmlWriter) {
        w.start("defs");
        for g in &self.gradients {
            g.write_svg(w);
        }
        w.end();
    }
}

impl WriteSvg for Group {
    fn write_svg(&self, w: &mut XmlWriter) {
        w.start("g");
        for s in &self.shapes {
            s.write_svg(w);
        }
        w.end();
    }
}

impl WriteSvg for Gradient {
    fn write_svg(&self, w: &mut XmlWriter) {
        match self {
            Gradient::Linear(g) => {
                w.start("linearGradient");
                w.attr("id", &g.id);
                w.attr("gradientUnits", GRADIENT_UNITS);
                w.attr("x1", g.x1);
                w.attr("x2", g.x2);
                w.attr("y1", g.y1);
                w.attr("y2", g.y2);
                if let Some(t) = g.transform {
                    w.attr("gradientTransform", t);
                }
            }
            Gradient::Radial(g) => {
                w.start("radialGradient");
                w.attr("id", &g.id);
                w.attr("gradientUnits", GRADIENT_UNITS);
                w.attr("cx", g.cx);
                w.attr("cy", g.cy);
                w.attr("r", g.r);
                w.attr("fx", g.fx);
                w.attr("fy", g.fy);
                if let Some(t) = g.transform {
                    w.attr("gradientTransform", t);
                }
            }
        }
        for stop in self.stops() {
            stop.write_svg(w);
        }
        w.end();
    }
}

impl WriteSvg for Stop {
    fn write_svg(&self, w: &mut XmlWriter) {
        w.start("stop");
        w.attr("offset", self.offset);
        w.attr("stop-color", &self.color);
        w.end();
    }
}

impl WriteSvg for Shape {
    fn write_svg(&self, w: &mut XmlWriter) {
        match self {
            Shape::Rect(r) => {
                w.start("rect");
                w.attr("x", r.x);
                w.attr("y", r.y);
                w.attr("width", r.width);
                w.attr("height", r.height);
                w.attr("fill", &r.fill);
            }
            Shape::Circle(c) => {
                w.start("circle");
                w.attr("cx", c.cx);
                w.attr("cy", c.cy);
                w.attr("r", c.r);
                w.attr("fill", &c.fill);
            }
        }
        w.end();
    }
}
