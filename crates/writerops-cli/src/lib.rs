// NOTE: Layering
//
// args/commands parse and dispatch; handlers gather input (flags first,
// then interactive prompts) and call writerops-runtime ops; presentation
// turns outcomes into terminal lines. Nothing here touches the data files
// directly.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod prompt;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
