pub mod lexer;
pub mod parser;
pub mod printer;
pub mod types;

pub use lexer::*;
pub use parser::Parser;
pub use printer::{print_sexp, Printer};
pub use types::*;
