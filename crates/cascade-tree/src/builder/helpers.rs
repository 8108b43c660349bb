use crate::error::{ParseError, Result};
use crate::sexp::{HasPosition, Keyword, List, SExp, Symbol};

fn expected(what: &str, sexp: &SExp) -> ParseError {
    ParseError::Expected {
        expected: what.to_string(),
        found: sexp.describe(),
        pos: sexp.position(),
    }
}

/// Extract a symbol from an S-expression
pub fn expect_symbol(sexp: &SExp) -> Result<&Symbol> {
    match sexp {
        SExp::Symbol(s) => Ok(s),
        _ => Err(expected("symbol", sexp)),
    }
}

/// Extract a string from an S-expression
pub fn expect_string(sexp: &SExp) -> Result<String> {
    match sexp {
        SExp::String(s) => Ok(s.value.clone()),
        _ => Err(expected("string", sexp)),
    }
}

/// A string, or `None` for `nil`
pub fn expect_optional_string(sexp: &SExp) -> Result<Option<String>> {
    match sexp {
        SExp::String(s) => Ok(Some(s.value.clone())),
        SExp::Nil(_) => Ok(None),
        _ => Err(expected("string or nil", sexp)),
    }
}

/// Extract a non-negative number from an S-expression
pub fn expect_number(sexp: &SExp) -> Result<usize> {
    match sexp {
        SExp::Number(n) => n.value.parse().map_err(|_| ParseError::Expected {
            expected: "non-negative number".to_string(),
            found: n.value.clone(),
            pos: n.pos,
        }),
        _ => Err(expected("number", sexp)),
    }
}

/// `true` or `false`, written as symbols
pub fn expect_bool(sexp: &SExp) -> Result<bool> {
    match sexp {
        SExp::Symbol(s) if s.value == "true" => Ok(true),
        SExp::Symbol(s) if s.value == "false" => Ok(false),
        _ => Err(expected("true or false", sexp)),
    }
}

/// Extract a list from an S-expression
pub fn expect_list(sexp: &SExp) -> Result<&List> {
    match sexp {
        SExp::List(l) => Ok(l),
        _ => Err(expected("list", sexp)),
    }
}

/// A node form split into its parts:
/// `(head [argument] [:field value]... child...)`, in any order after the head.
#[derive(Debug)]
pub struct NodeForm<'a> {
    pub head: &'a Symbol,
    pub argument: Option<&'a SExp>,
    pub fields: Vec<(&'a Keyword, &'a SExp)>,
    pub children: Vec<&'a SExp>,
}

impl<'a> NodeForm<'a> {
    pub fn field(&self, name: &str) -> Option<&'a SExp> {
        self.fields.iter().find(|(k, _)| k.name == name).map(|(_, v)| *v)
    }
}

/// Split a node list into head, positional argument, keyword fields and children
pub fn split_form(list: &List) -> Result<NodeForm<'_>> {
    let (first, rest) = list.elements.split_first().ok_or_else(|| ParseError::Expected {
        expected: "node name".to_string(),
        found: "empty list".to_string(),
        pos: list.pos,
    })?;

    let mut form = NodeForm {
        head: expect_symbol(first)?,
        argument: None,
        fields: Vec::new(),
        children: Vec::new(),
    };

    let mut elements = rest.iter();
    while let Some(element) = elements.next() {
        match element {
            SExp::Keyword(k) => {
                let value = elements.next().ok_or_else(|| ParseError::Expected {
                    expected: format!("value for :{}", k.name),
                    found: "end of list".to_string(),
                    pos: k.pos,
                })?;
                form.fields.push((k, value));
            }
            SExp::List(_) => form.children.push(element),
            _ if form.argument.is_none() && form.children.is_empty() => {
                form.argument = Some(element);
            }
            _ => return Err(expected("field or child node", element)),
        }
    }

    Ok(form)
}
