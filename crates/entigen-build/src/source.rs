///
/// SourceBuilder
/// Incrementally constructs Rust source text with indentation handling.
///

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct SourceBuilder {
    content: String,
    indent_level: usize,
}

impl SourceBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: String::new(),
            indent_level: 0,
        }
    }

    pub fn push_line(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.indent_level {
                self.content.push_str(INDENT);
            }
            self.content.push_str(line);
        }
        self.content.push('\n');
    }

    pub fn blank(&mut self) {
        self.content.push('\n');
    }

    pub const fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub const fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    #[must_use]
    pub fn build(self) -> String {
        self.content
    }
}

///
/// SourceUnit
///
/// One fully-rendered compilation unit: module docs, a single import block,
/// and item blocks separated by blank lines. The formatter is the only place
/// layout decisions live; builders above it only decide content and order.
///

#[derive(Debug, Default)]
pub struct SourceUnit {
    pub docs: Vec<String>,
    pub imports: Vec<String>,
    pub items: Vec<String>,
}

impl SourceUnit {
    #[must_use]
    pub fn new(docs: Vec<String>) -> Self {
        Self {
            docs,
            imports: Vec::new(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn to_source(&self) -> String {
        let mut out = SourceBuilder::new();

        for line in &self.docs {
            if line.is_empty() {
                out.push_line("//!");
            } else {
                out.push_line(&format!("//! {line}"));
            }
        }

        if !self.imports.is_empty() {
            out.blank();
            for import in &self.imports {
                out.push_line(import);
            }
        }

        for item in &self.items {
            out.blank();
            for line in item.lines() {
                out.push_line(line);
            }
        }

        out.build()
    }
}
