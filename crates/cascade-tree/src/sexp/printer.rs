use crate::sexp::types::*;

/// Pretty printer for S-expressions.
///
/// A list prints its leading atoms on one line; every nested list after
/// that goes on its own line, one indent level deeper. Tree dumps therefore
/// read one node per line.
pub struct Printer {
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    pub fn print(&self, sexp: &SExp) -> String {
        let mut out = String::new();
        self.print_sexp(sexp, 0, &mut out);
        out
    }

    fn print_sexp(&self, sexp: &SExp, depth: usize, out: &mut String) {
        match sexp {
            SExp::Symbol(s) => out.push_str(&s.value),
            SExp::Keyword(k) => {
                out.push(':');
                out.push_str(&k.name);
            }
            SExp::String(s) => {
                out.push('"');
                out.push_str(&escape_string(&s.value));
                out.push('"');
            }
            SExp::Number(n) => out.push_str(&n.value),
            SExp::Nil(_) => out.push_str("nil"),
            SExp::List(l) => self.print_list(l, depth, out),
        }
    }

    fn print_list(&self, list: &List, depth: usize, out: &mut String) {
        out.push('(');

        let mut broke_line = false;
        for (i, element) in list.elements.iter().enumerate() {
            let nested = matches!(element, SExp::List(_));
            if nested || broke_line {
                out.push('\n');
                out.push_str(&" ".repeat((depth + 1) * self.indent));
                broke_line = true;
            } else if i > 0 {
                out.push(' ');
            }
            self.print_sexp(element, depth + 1, out);
        }

        out.push(')');
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape special characters in a string
fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Convenience function for printing S-expressions
pub fn print_sexp(sexp: &SExp) -> String {
    Printer::new().print(sexp)
}
