//! Gradient fill markup.
//!
//! Turns the cached parameters and the current stops into a complete SVG
//! tree. The tree is rebuilt from scratch on every render.

use gradfill_engine::id::ControlId;
use gradfill_svg::{
    Circle, Gradient, Length, LinearGradient, Paint, RadialGradient, Rect, Shape as SvgShape,
    Stop, Svg, Transform,
};

use crate::params::{ControlParams, GradientKind, Shape};

/// Side of the square placeholder shown before the first render.
pub const PLACEHOLDER_SIZE: f64 = 500.0;

/// Id of the gradient definition owned by control `id`.
///
/// Every element id in a page shares one namespace, so the control id is
/// embedded to keep instances apart.
pub fn gradient_id(id: &ControlId) -> String {
    format!("gradient-{id}")
}

/// Black-to-white linear fill in a fixed square, rendered at init.
pub fn placeholder(id: &ControlId) -> Svg {
    let gid = gradient_id(id);
    let gradient = LinearGradient::new(gid.clone())
        .stop(Stop::new(Length::Percent(4.0), "black"))
        .stop(Stop::new(Length::Percent(94.0), "white"));

    Svg::new(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE)
        .gradient(Gradient::Linear(gradient))
        .shape(SvgShape::Rect(Rect::new(0.0, 0.0, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, Paint::server(gid))))
}

/// Builds the full replacement markup for one render.
pub fn build(id: &ControlId, params: &ControlParams, stops: Vec<Stop>) -> Svg {
    let gid = gradient_id(id);
    let (width, height) = (params.width(), params.height());

    Svg::new(width, height)
        .gradient(gradient(&gid, params, stops))
        .shape(shape(params, Paint::server(gid)))
}

fn shape(params: &ControlParams, fill: Paint) -> SvgShape {
    let (width, height) = (params.width(), params.height());
    match params.shape() {
        Shape::Rectangle => SvgShape::Rect(Rect::new(0.0, 0.0, width, height, fill)),
        Shape::Circle => SvgShape::Circle(Circle::new(width / 2.0, height / 2.0, width / 2.0, fill)),
    }
}

fn gradient(gid: &str, params: &ControlParams, stops: Vec<Stop>) -> Gradient {
    let rotate = Transform::Rotate {
        angle: params.rotation(),
        cx: params.width() / 2.0,
        cy: params.height() / 2.0,
    };
    let (start, end) = (params.offset_start(), params.offset_end());

    match params.gradient() {
        // Horizontal axis along the bottom edge; rotation turns it.
        GradientKind::Linear => Gradient::Linear(
            LinearGradient::new(gid)
                .start(Length::Percent(start), Length::Percent(100.0))
                .end(Length::Percent(100.0 - end), Length::Percent(100.0))
                .transform(rotate)
                .stops(stops),
        ),
        GradientKind::Radial => Gradient::Radial(
            RadialGradient::new(gid)
                .center(Length::Percent(start), Length::Percent(end))
                .focal(Length::Percent(start), Length::Percent(end))
                .radius(Length::Percent(50.0))
                .transform(rotate)
                .stops(stops),
        ),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn id() -> ControlId {
        ControlId::generate_with(&mut SmallRng::seed_from_u64(1))
    }

    fn params(shape: Shape, gradient: GradientKind) -> ControlParams {
        ControlParams {
            rotation: Some(0.0),
            width: Some(500.0),
            height: Some(500.0),
            offset_start: Some(0.0),
            offset_end: Some(0.0),
            shape: Some(shape),
            gradient: Some(gradient),
        }
    }

    fn bw() -> Vec<Stop> {
        vec![
            Stop::new(Length::Percent(4.0), "black"),
            Stop::new(Length::Percent(94.0), "white"),
        ]
    }

    #[test]
    fn linear_rectangle_spans_the_control() {
        let svg = build(&id(), &params(Shape::Rectangle, GradientKind::Linear), bw());

        let SvgShape::Rect(rect) = &svg.group.shapes[0] else { panic!("expected rect") };
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 0.0, 500.0, 500.0));

        let Gradient::Linear(g) = &svg.defs.gradients[0] else { panic!("expected linear") };
        assert_eq!(g.x1, Length::Percent(0.0));
        assert_eq!(g.x2, Length::Percent(100.0));
        assert_eq!((g.y1, g.y2), (Length::Percent(100.0), Length::Percent(100.0)));
        assert!(svg.to_markup().contains(r#"gradientUnits="userSpaceOnUse""#));
        assert_eq!(g.stops, bw());
    }

    #[test]
    fn fill_references_the_declared_gradient() {
        let id = id();
        let svg = build(&id, &params(Shape::Circle, GradientKind::Radial), bw());
        let fill_id = svg.group.shapes[0].fill().server_id();
        assert_eq!(fill_id, svg.defs.gradients[0].id());
        assert!(fill_id.contains(id.as_str()));
    }

    #[test]
    fn circle_is_centered_with_half_width_radius() {
        let mut p = params(Shape::Circle, GradientKind::Linear);
        p.width = Some(300.0);
        p.height = Some(200.0);
        let svg = build(&id(), &p, bw());
        let SvgShape::Circle(c) = &svg.group.shapes[0] else { panic!("expected circle") };
        assert_eq!((c.cx, c.cy, c.r), (150.0, 100.0, 150.0));
    }

    #[test]
    fn radial_uses_offsets_as_center_and_focus() {
        let mut p = params(Shape::Rectangle, GradientKind::Radial);
        p.offset_start = Some(30.0);
        p.offset_end = Some(70.0);
        let svg = build(&id(), &p, bw());
        let Gradient::Radial(g) = &svg.defs.gradients[0] else { panic!("expected radial") };
        assert_eq!((g.cx, g.cy), (Length::Percent(30.0), Length::Percent(70.0)));
        assert_eq!((g.fx, g.fy), (Length::Percent(30.0), Length::Percent(70.0)));
        assert_eq!(g.r, Length::Percent(50.0));
    }

    #[test]
    fn linear_end_offset_counts_from_the_far_edge() {
        let mut p = params(Shape::Rectangle, GradientKind::Linear);
        p.offset_start = Some(10.0);
        p.offset_end = Some(25.0);
        let svg = build(&id(), &p, bw());
        let Gradient::Linear(g) = &svg.defs.gradients[0] else { panic!("expected linear") };
        assert_eq!((g.x1, g.x2), (Length::Percent(10.0), Length::Percent(75.0)));
    }

    #[test]
    fn rotation_is_about_the_shape_center() {
        let mut p = params(Shape::Rectangle, GradientKind::Linear);
        p.rotation = Some(45.0);
        p.width = Some(400.0);
        p.height = Some(100.0);
        let svg = build(&id(), &p, bw());
        let Gradient::Linear(g) = &svg.defs.gradients[0] else { panic!("expected linear") };
        assert_eq!(g.transform, Some(Transform::Rotate { angle: 45.0, cx: 200.0, cy: 50.0 }));
    }

    #[test]
    fn missing_rotation_serializes_as_zero() {
        let mut p = params(Shape::Rectangle, GradientKind::Linear);
        p.rotation = None;
        let markup = build(&id(), &p, bw()).to_markup();
        assert!(markup.contains(r#"gradientTransform="rotate(0, 250, 250)""#), "{markup}");
    }

    #[test]
    fn canvas_matches_control_size() {
        let mut p = params(Shape::Rectangle, GradientKind::Linear);
        p.width = Some(640.0);
        p.height = Some(360.0);
        let svg = build(&id(), &p, bw());
        assert_eq!((svg.width, svg.height), (640.0, 360.0));
        assert_eq!(svg.view_box.to_string(), "0 0 640 360");
    }

    #[test]
    fn placeholder_is_black_to_white_square() {
        let id = id();
        let svg = placeholder(&id);
        assert_eq!((svg.width, svg.height), (PLACEHOLDER_SIZE, PLACEHOLDER_SIZE));
        assert_eq!(svg.defs.gradients.len(), 1);
        assert_eq!(svg.defs.gradients[0].stops(), bw().as_slice());
        assert_eq!(svg.group.shapes[0].fill().server_id(), gradient_id(&id));
    }

    #[test]
    fn markup_parses_as_xml() {
        for shape in [Shape::Rectangle, Shape::Circle] {
            for kind in [GradientKind::Linear, GradientKind::Radial] {
                let markup = build(&id(), &params(shape, kind), bw()).to_markup();
                roxmltree::Document::parse(&markup).unwrap();
            }
        }
    }
}
