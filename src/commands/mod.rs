// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod date;
pub mod echo;
pub mod edit_cmd;
pub mod help_cmd;
pub mod ls;
pub mod md_cmd;
pub mod motd_cmd;
pub mod pwd;
pub mod rd_cmd;
pub mod registry;
pub mod tree_cmd;
pub mod types;
pub mod whoami_cmd;

#[cfg(test)]
pub(crate) mod test_support;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{
    Command, CommandContext, CommandResult, Continuation, Control, ErrorKind, MessageKind, Output,
    ShellError, Span, Style,
};
