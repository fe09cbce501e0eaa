use std::fmt::{self, Write as _};

/// Types that serialize themselves as SVG elements.
pub trait WriteSvg {
    fn write_svg(&self, w: &mut XmlWriter);
}

// ── XmlWriter ─────────────────────────────────────────────────────────────

/// Minimal streaming XML writer.
///
/// Elements are opened with [`start`](Self::start), given attributes with
/// [`attr`](Self::attr) while the start tag is still open, and closed with
/// [`end`](Self::end). Elements without children are written self-closing.
#[derive(Debug, Default)]
pub struct XmlWriter {
    buf: String,
    stack: Vec<&'static str>,
    /// `true` while the most recent start tag has not yet been closed with `>`.
    tag_open: bool,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, name: &'static str) {
        self.close_start_tag();
        self.buf.push('<');
        self.buf.push_str(name);
        self.stack.push(name);
        self.tag_open = true;
    }

    /// Writes `name="value"` on the open start tag.
    ///
    /// Calls made after the start tag has been closed are ignored in release
    /// builds.
    pub fn attr(&mut self, name: &str, value: impl fmt::Display) {
        debug_assert!(self.tag_open, "XmlWriter::attr: no open start tag for {name}");
        if !self.tag_open {
            return;
        }
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        let _ = write!(Escaper(&mut self.buf), "{value}");
        self.buf.push('"');
    }

    pub fn end(&mut self) {
        let Some(name) = self.stack.pop() else {
            debug_assert!(false, "XmlWriter::end: unbalanced end");
            return;
        };
        if self.tag_open {
            self.buf.push_str("/>");
            self.tag_open = false;
        } else {
            self.buf.push_str("</");
            self.buf.push_str(name);
            self.buf.push('>');
        }
    }

    /// Closes any elements left open and returns the markup.
    pub fn finish(mut self) -> String {
        while !self.stack.is_empty() {
            self.end();
        }
        self.buf
    }

    fn close_start_tag(&mut self) {
        if self.tag_open {
            self.buf.push('>');
            self.tag_open = false;
        }
    }
}

/// Escapes attribute text as it is written.
struct Escaper<'a>(&'a mut String);

impl fmt::Write for Escaper<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            match c {
                '&' => self.0.push_str("&amp;"),
                '<' => self.0.push_str("&lt;"),
                '>' => self.0.push_str("&gt;"),
                '"' => self.0.push_str("&quot;"),
                '\'' => self.0.push_str("&apos;"),
                c => self.0.push(c),
            }
        }
        Ok(())
    }
}
