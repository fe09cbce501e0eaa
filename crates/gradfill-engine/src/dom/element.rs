use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

/// Shared handle to an element. Host and control both hold one.
pub type ElementRef = Rc<RefCell<Element>>;

/// An HTML element with either child elements or raw inner markup.
///
/// Setting inner markup discards any child elements, the same way assigning
/// `innerHTML` does in a browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    children: Vec<ElementRef>,
    markup: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    /// Creates a detached element behind a shared handle.
    pub fn create(tag: impl Into<String>) -> ElementRef {
        Rc::new(RefCell::new(Self::new(tag)))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn append_child(&mut self, child: ElementRef) {
        self.markup.clear();
        self.children.push(child);
    }

    pub fn children(&self) -> &[ElementRef] {
        &self.children
    }

    /// Replaces the element's entire content with `markup`.
    pub fn set_inner_markup(&mut self, markup: impl Into<String>) {
        self.children.clear();
        self.markup = markup.into();
    }

    /// The element's content, with child elements serialized.
    pub fn inner_markup(&self) -> String {
        if self.children.is_empty() {
            return self.markup.clone();
        }
        let mut out = String::new();
        for child in &self.children {
            out.push_str(&child.borrow().outer_markup());
        }
        out
    }

    /// The element including its own start and end tags.
    pub fn outer_markup(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{id}\"");
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", self.classes.join(" "));
        }
        out.push('>');
        out.push_str(&self.inner_markup());
        let _ = write!(out, "</{}>", self.tag);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_markup_replaces_children() {
        let root = Element::create("div");
        root.borrow_mut().append_child(Element::create("span"));
        root.borrow_mut().set_inner_markup("<svg/>");
        assert!(root.borrow().children().is_empty());
        assert_eq!(root.borrow().inner_markup(), "<svg/>");
    }

    #[test]
    fn outer_markup_nests_children() {
        let root = Element::create("div");
        let child = Element::create("div");
        child.borrow_mut().add_class("svg-container");
        child.borrow_mut().set_id("svg-container");
        child.borrow_mut().set_inner_markup("x");
        root.borrow_mut().append_child(Rc::clone(&child));
        assert_eq!(
            root.borrow().outer_markup(),
            r#"<div><div id="svg-container" class="svg-container">x</div></div>"#
        );
    }

    #[test]
    fn shared_handle_sees_later_updates() {
        let root = Element::create("div");
        let child = Element::create("div");
        root.borrow_mut().append_child(Rc::clone(&child));
        child.borrow_mut().set_inner_markup("after");
        assert_eq!(root.borrow().inner_markup(), "<div>after</div>");
    }

    #[test]
    fn add_class_ignores_duplicates() {
        let mut el = Element::new("div");
        el.add_class("a");
        el.add_class("a");
        assert_eq!(el.outer_markup(), r#"<div class="a"></div>"#);
    }
}
