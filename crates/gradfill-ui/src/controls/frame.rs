use std::rc::Rc;

use gradfill_engine::dom::{Element, ElementRef};
use gradfill_engine::host::Context;
use gradfill_engine::id::ControlId;
use gradfill_svg::Svg;

use super::{MAIN_CONTAINER_CLASS, SVG_CONTAINER_CLASS};
use crate::markup;

/// Elements and identity shared by both controls once initialized.
///
/// Layout inside the host container:
///
/// ```text
/// <div class="main-container">
///   <div id="svg-container" class="svg-container"> …svg… </div>
/// </div>
/// ```
#[derive(Debug)]
pub(crate) struct ControlFrame {
    pub(crate) id: ControlId,
    main_container: ElementRef,
    svg_container: ElementRef,
}

impl ControlFrame {
    /// Builds the element tree, shows the placeholder, and attaches the tree
    /// to `container`. Also asks the host for resize notifications.
    pub(crate) fn mount(id: ControlId, context: &mut Context, container: &ElementRef) -> Self {
        // Width changes only reach the control when resize tracking is on.
        context.mode.track_container_resize(true);

        let main_container = Element::create("div");
        main_container.borrow_mut().add_class(MAIN_CONTAINER_CLASS);

        let svg_container = Element::create("div");
        {
            let mut svg = svg_container.borrow_mut();
            svg.add_class(SVG_CONTAINER_CLASS);
            svg.set_id(SVG_CONTAINER_CLASS);
            svg.set_inner_markup(markup::placeholder(&id).to_markup());
        }

        container.borrow_mut().append_child(Rc::clone(&main_container));
        main_container.borrow_mut().append_child(Rc::clone(&svg_container));

        Self { id, main_container, svg_container }
    }

    /// Replaces everything inside the svg container.
    pub(crate) fn render(&self, svg: &Svg) {
        self.svg_container.borrow_mut().set_inner_markup(svg.to_markup());
    }

    pub(crate) fn svg_container(&self) -> ElementRef {
        Rc::clone(&self.svg_container)
    }

    pub(crate) fn main_container(&self) -> ElementRef {
        Rc::clone(&self.main_container)
    }
}
