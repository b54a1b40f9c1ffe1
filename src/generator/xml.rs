//! Minimal streaming XML writer.
//!
//! Pretty mode puts each element on its own line with two-space indentation;
//! minified mode drops all inter-element whitespace. Text content is never
//! touched, so both modes carry the same data.

use crate::utils::escape_xml;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Output formatting shared by urlset and index documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlStyle<'a> {
    pub minify: bool,
    /// `href` of an `<?xml-stylesheet?>` processing instruction.
    pub stylesheet: Option<&'a str>,
}

pub struct XmlBuf {
    out: String,
    depth: usize,
    pretty: bool,
}

impl XmlBuf {
    pub fn new(minify: bool) -> Self {
        Self::with_capacity(4096, minify)
    }

    pub fn with_capacity(capacity: usize, minify: bool) -> Self {
        Self {
            out: String::with_capacity(capacity),
            depth: 0,
            pretty: !minify,
        }
    }

    /// Fragment writer starting at `depth`, for size estimation.
    pub fn at_depth(depth: usize, minify: bool) -> Self {
        Self {
            out: String::with_capacity(256),
            depth,
            pretty: !minify,
        }
    }

    /// XML declaration plus the optional stylesheet instruction.
    pub fn prolog(&mut self, style: &XmlStyle<'_>) {
        self.line_start();
        self.out.push_str(XML_DECLARATION);
        self.line_end();
        if let Some(href) = style.stylesheet {
            self.line_start();
            self.out.push_str(r#"<?xml-stylesheet type="text/xsl" href=""#);
            self.out.push_str(&escape_xml(href));
            self.out.push_str(r#""?>"#);
            self.line_end();
        }
    }

    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.line_start();
        self.tag(tag, attrs);
        self.out.push('>');
        self.line_end();
        self.depth += 1;
    }

    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line_start();
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        self.line_end();
    }

    /// `<tag attrs>text</tag>` on one line.
    pub fn leaf_with(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.line_start();
        self.tag(tag, attrs);
        self.out.push('>');
        self.out.push_str(&escape_xml(text));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        self.line_end();
    }

    pub fn leaf(&mut self, tag: &str, text: &str) {
        self.leaf_with(tag, &[], text);
    }

    pub fn leaf_opt(&mut self, tag: &str, text: Option<&str>) {
        if let Some(text) = text {
            self.leaf(tag, text);
        }
    }

    /// `<tag attrs/>`
    pub fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.line_start();
        self.tag(tag, attrs);
        self.out.push_str("/>");
        self.line_end();
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_xml(value));
            self.out.push('"');
        }
    }

    fn line_start(&mut self) {
        if self.pretty {
            for _ in 0..self.depth {
                self.out.push_str("  ");
            }
        }
    }

    fn line_end(&mut self) {
        if self.pretty {
            self.out.push('\n');
        }
    }
}
