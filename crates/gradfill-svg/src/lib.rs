//! Typed SVG node tree for gradient fills.
//!
//! Markup is assembled as a small tree of typed nodes and serialized once at
//! the end, so attribute quoting and escaping live in exactly one place.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | `Svg`, `Defs`, `Gradient`, `Stop`, `Shape`, `Paint`, `Length`, `Transform` |
//! | [`writer`] | `XmlWriter`, `WriteSvg` |
//!
//! # Quick start
//!
//! ```rust
//! use gradfill_svg::{Gradient, Length, LinearGradient, Paint, Rect, Shape, Stop, Svg};
//!
//! let gradient = LinearGradient::new("fill")
//!     .stop(Stop::new(Length::Percent(0.0), "black"))
//!     .stop(Stop::new(Length::Percent(100.0), "white"));
//!
//! let svg = Svg::new(100.0, 50.0)
//!     .gradient(Gradient::Linear(gradient))
//!     .shape(Shape::Rect(Rect::new(0.0, 0.0, 100.0, 50.0, Paint::server("fill"))));
//!
//! let markup = svg.to_markup();
//! assert!(markup.contains(r#"fill="url(#fill)""#));
//! ```

pub mod node;
pub mod writer;

pub use node::{
    Circle, Defs, Gradient, Group, Length, LinearGradient, Paint, RadialGradient,
    Rect, Shape, Stop, Svg, Transform, ViewBox,
};
pub use writer::{WriteSvg, XmlWriter};

#[cfg(test)]
mod markup_tests {
    use super::*;

    fn two_stop() -> Vec<Stop> {
        vec![
            Stop::new(Length::Percent(4.0), "black"),
            Stop::new(Length::Percent(94.0), "white"),
        ]
    }

    fn parse(markup: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(markup).unwrap()
    }

    #[test]
    fn linear_rect_is_well_formed() {
        let mut g = LinearGradient::new("g1");
        g.stops = two_stop();
        let svg = Svg::new(500.0, 500.0)
            .gradient(Gradient::Linear(g))
            .shape(Shape::Rect(Rect::new(0.0, 0.0, 500.0, 500.0, Paint::server("g1"))));

        let markup = svg.to_markup();
        let doc = parse(&markup);
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "svg");
        assert_eq!(root.attribute("viewBox"), Some("0 0 500 500"));

        let stops: Vec<_> = doc
            .descendants()
            .filter(|n| n.has_tag_name("stop"))
            .map(|n| (n.attribute("offset").unwrap(), n.attribute("stop-color").unwrap()))
            .collect();
        assert_eq!(stops, vec![("4%", "black"), ("94%", "white")]);
    }

    #[test]
    fn defs_precede_group() {
        let svg = Svg::new(10.0, 10.0)
            .gradient(Gradient::Linear(LinearGradient::new("a")))
            .shape(Shape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0, Paint::server("a"))));
        let markup = svg.to_markup();
        let doc = parse(&markup);
        let children: Vec<_> = doc
            .root_element()
            .children()
            .filter(|n| n.is_element())
            .map(|n| n.tag_name().name())
            .collect();
        assert_eq!(children, vec!["defs", "g"]);
    }

    #[test]
    fn hostile_color_is_escaped() {
        let mut g = RadialGradient::new("r");
        g.stops.push(Stop::new(Length::Percent(0.0), r#"red" onload="x"#));
        let svg = Svg::new(10.0, 10.0)
            .gradient(Gradient::Radial(g))
            .shape(Shape::Circle(Circle::new(5.0, 5.0, 5.0, Paint::server("r"))));

        let markup = svg.to_markup();
        let doc = parse(&markup);
        let stop = doc.descendants().find(|n| n.has_tag_name("stop")).unwrap();
        assert_eq!(stop.attribute("stop-color"), Some(r#"red" onload="x"#));
        assert!(stop.attribute("onload").is_none());
    }

    #[test]
    fn display_matches_to_markup() {
        let svg = Svg::new(1.0, 2.0);
        assert_eq!(svg.to_string(), svg.to_markup());
    }
}
