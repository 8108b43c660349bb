use crate::error::Position;

/// An S-expression value
#[derive(Debug, Clone, PartialEq)]
pub enum SExp {
    Symbol(Symbol),
    Keyword(Keyword),
    String(StringLit),
    Number(Number),
    Nil(Nil),
    List(List),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub value: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub name: String, // Without the ':'
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLit {
    pub value: String, // Unescaped value
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: String, // Kept as written; callers parse what they need
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Nil {
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub elements: Vec<SExp>,
    pub pos: Position, // Position of opening paren
}

impl Symbol {
    pub fn new(value: impl Into<String>, pos: Position) -> Self {
        Self { value: value.into(), pos }
    }
}

impl Keyword {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self { name: name.into(), pos }
    }
}

impl StringLit {
    pub fn new(value: impl Into<String>, pos: Position) -> Self {
        Self { value: value.into(), pos }
    }
}

impl Number {
    pub fn new(value: impl Into<String>, pos: Position) -> Self {
        Self { value: value.into(), pos }
    }
}

impl Nil {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

impl List {
    pub fn new(elements: Vec<SExp>, pos: Position) -> Self {
        Self { elements, pos }
    }

    /// The leading symbol naming what the list describes, if any
    pub fn head(&self) -> Option<&Symbol> {
        match self.elements.first() {
            Some(SExp::Symbol(s)) => Some(s),
            _ => None,
        }
    }
}

// Constructors for expressions synthesized from a tree rather than read from text
impl SExp {
    pub fn symbol(value: impl Into<String>) -> Self {
        SExp::Symbol(Symbol::new(value, Position::DUMMY))
    }

    pub fn keyword(name: impl Into<String>) -> Self {
        SExp::Keyword(Keyword::new(name, Position::DUMMY))
    }

    pub fn string(value: impl Into<String>) -> Self {
        SExp::String(StringLit::new(value, Position::DUMMY))
    }

    pub fn number(value: usize) -> Self {
        SExp::Number(Number::new(value.to_string(), Position::DUMMY))
    }

    pub fn nil() -> Self {
        SExp::Nil(Nil::new(Position::DUMMY))
    }

    pub fn list(elements: Vec<SExp>) -> Self {
        SExp::List(List::new(elements, Position::DUMMY))
    }

    /// Human-readable description used in "expected X, found Y" errors
    pub fn describe(&self) -> String {
        match self {
            SExp::Symbol(s) => format!("symbol '{}'", s.value),
            SExp::Keyword(k) => format!("keyword ':{}'", k.name),
            SExp::String(s) => format!("string {:?}", s.value),
            SExp::Number(n) => format!("number {}", n.value),
            SExp::Nil(_) => "nil".to_string(),
            SExp::List(l) => match l.head() {
                Some(head) => format!("({} ...)", head.value),
                None => "list".to_string(),
            },
        }
    }
}

// Position accessor trait
pub trait HasPosition {
    fn position(&self) -> Position;
}

impl HasPosition for SExp {
    fn position(&self) -> Position {
        match self {
            SExp::Symbol(s) => s.pos,
            SExp::Keyword(k) => k.pos,
            SExp::String(s) => s.pos,
            SExp::Number(n) => n.pos,
            SExp::Nil(n) => n.pos,
            SExp::List(l) => l.pos,
        }
    }
}
