//! Error reporting for the terminal

use cascade_tree::SyntaxError;
use colored::*;

/// Print a formatted error message
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    // Show chain of causes
    let mut current = error.source();
    while let Some(cause) = current {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
        current = std::error::Error::source(cause);
    }

    if let Some(syntax) = error.downcast_ref::<SyntaxError>() {
        print_backtrace(syntax);
    }
}

/// Print the `from file:line` frames of a failed pass
pub fn print_backtrace(error: &SyntaxError) {
    for frame in error.backtrace() {
        eprintln!("    {} {}", "from".dimmed(), frame.to_string().cyan());
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}
