//! Engine: queue, classifier, visitor and the breadth-first driver, plus the CLI front end.

pub mod arg_parser;
pub mod classify;
pub mod cli;
pub mod queue;
pub mod tools;
pub mod traversal;
pub mod visit;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use classify::{classify, validate_root};
pub use cli::{handle_run, setup_opts};
pub use queue::DirQueue;
pub use tools::{
    file_type_char, format_mtime, format_name, format_size, permission_string, size_unit,
};
pub use traversal::Traverser;
pub use visit::render_line;
