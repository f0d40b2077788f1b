pub mod commands;
pub mod context;
pub mod logging;
pub mod refresher;
pub mod repl;
pub mod sink;

pub use context::CliContext;
pub use repl::readline;
