//! Code builder for generating properly indented TypeScript.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the convention for TypeScript and JSX.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            // Fallback to 2 whitespaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for loop-heavy renderers.
///
/// # Example
///
/// ```
/// use crudo_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export function greet() {")
///     .indent()
///     .line("return 'hello';")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export function greet() {\n  return 'hello';\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a JSDoc comment (mutable).
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    // =========================================================================
    // Consuming API - for chained construction
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use crudo_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::typescript()
    ///     .block("export function main() {", "}", |b: CodeBuilder| {
    ///         b.line("run();")
    ///     })
    ///     .build();
    /// ```
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a JSDoc comment (`/** text */` for single line).
    pub fn jsdoc(mut self, text: &str) -> Self {
        self.push_jsdoc(text);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
    }

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::typescript().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::typescript()
            .line("function foo() {")
            .indent()
            .line("return 1;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::typescript()
            .block("const config = {", "};", |b| b.line("page: 1,"))
            .build();

        assert_eq!(code, "const config = {\n  page: 1,\n};\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::typescript()
            .line("import { api } from './api';")
            .blank()
            .line("export const x = 1;")
            .build();

        assert_eq!(
            code,
            "import { api } from './api';\n\nexport const x = 1;\n"
        );
    }

    #[test]
    fn test_jsdoc() {
        let code = CodeBuilder::typescript()
            .jsdoc("A helper")
            .line("export function helper() {}")
            .build();

        assert_eq!(code, "/** A helper */\nexport function helper() {}\n");
    }

    #[test]
    fn test_conditional() {
        let on = CodeBuilder::typescript()
            .when(true, |b| b.line("'use strict';"))
            .line("run();")
            .build();

        let off = CodeBuilder::typescript()
            .when(false, |b| b.line("'use strict';"))
            .line("run();")
            .build();

        assert_eq!(on, "'use strict';\nrun();\n");
        assert_eq!(off, "run();\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::typescript()
            .line("const colors = [")
            .indent()
            .each(["'red'", "'green'", "'blue'"], |b, color| {
                b.line(&format!("{},", color))
            })
            .dedent()
            .line("];")
            .build();

        assert_eq!(
            code,
            "const colors = [\n  'red',\n  'green',\n  'blue',\n];\n"
        );
    }

    #[test]
    fn test_mutable_api() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("function foo() {")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_raw_appends_without_newline() {
        let mut builder = CodeBuilder::typescript();
        builder.push_raw("export const x = ").push_raw("1;");
        builder.push_blank();
        assert_eq!(builder.build(), "export const x = 1;\n");
    }
}
