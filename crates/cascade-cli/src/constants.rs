//! Constants used throughout the cascade CLI

/// Per-project configuration file, looked up in the working directory
pub const CONFIG_FILENAME: &str = ".cascade.toml";

/// Path argument meaning "read the tree from standard input"
pub const STDIN_PATH: &str = "-";

/// Indent width for tree dumps when nothing else is configured
pub const DEFAULT_INDENT: usize = 2;

/// Log level when neither the config file nor `--verbose` says otherwise
pub const DEFAULT_LOG_LEVEL: &str = "warn";
