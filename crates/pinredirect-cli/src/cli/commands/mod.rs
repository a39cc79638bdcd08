//! CLI command handlers, one per file.

mod completions;
mod man;
mod redirect;
mod resolve;
mod table;

pub use completions::run_completions;
pub use man::run_man;
pub use redirect::run_redirect;
pub use resolve::run_resolve;
pub use table::run_table;
