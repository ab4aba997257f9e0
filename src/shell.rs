//! Shell
//!
//! Main entry point for the terminal session. Ties together the line
//! parser, the command registry, the namespace store and the single
//! continuation slot used by interactive commands.

use tracing::{debug, warn};

use crate::commands::{
    create_default_registry, CommandContext, CommandRegistry, CommandResult, Continuation,
    MessageKind, Output, ShellError,
};
use crate::fs::{FileSystem, InMemoryFs};
use crate::parser::{parse_line, Redirect, RedirectMode};
use crate::store::{KeyValueStore, MemoryStore};

pub const DEFAULT_HOME: &str = "/users/guest";
pub const DEFAULT_USER: &str = "guest";

/// Options for creating a shell session.
#[derive(Default)]
pub struct ShellOptions {
    /// Starting directory, created if missing
    pub cwd: Option<String>,
    /// Target of a bare `cd`
    pub home: Option<String>,
    /// Name reported by `whoami`
    pub user: Option<String>,
    /// Namespace store (defaults to the seeded InMemoryFs)
    pub fs: Option<Box<dyn FileSystem>>,
    /// Key-value store backing `motd`
    pub store: Option<Box<dyn KeyValueStore>>,
}

/// A single-user terminal session.
pub struct Shell {
    fs: Box<dyn FileSystem>,
    registry: CommandRegistry,
    store: Box<dyn KeyValueStore>,
    user: String,
    home: String,
    pending: Option<Continuation>,
}

impl Shell {
    /// Create a new session.
    pub fn new(options: ShellOptions) -> Self {
        let mut fs = options
            .fs
            .unwrap_or_else(|| Box::new(InMemoryFs::with_default_layout()));

        if let Some(cwd) = options.cwd.as_deref() {
            let moved = fs
                .create_dir_all(cwd)
                .and_then(|_| fs.change_directory(cwd));
            if let Err(e) = moved {
                warn!(cwd, error = %e, "could not enter starting directory");
            }
        }

        Self {
            fs,
            registry: create_default_registry(),
            store: options
                .store
                .unwrap_or_else(|| Box::new(MemoryStore::new())),
            user: options.user.unwrap_or_else(|| DEFAULT_USER.to_string()),
            home: options.home.unwrap_or_else(|| DEFAULT_HOME.to_string()),
            pending: None,
        }
    }

    /// Process one raw input line.
    pub async fn exec(&mut self, line: &str) -> CommandResult {
        let mut ctx = CommandContext {
            fs: &mut *self.fs,
            registry: &self.registry,
            store: &mut *self.store,
            user: &self.user,
            home: &self.home,
        };

        if let Some(next) = self.pending.take() {
            debug!("feeding line to pending continuation");
            let result = next(line.to_string(), &mut ctx).unwrap_or_else(|e| {
                warn!(error = %e, "continuation failed");
                CommandResult::from_error(&e)
            });
            return self.settle(result);
        }

        let parsed = match parse_line(line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return CommandResult::empty(),
            Err(e) => return CommandResult::from_error(&ShellError::from(e)),
        };

        let Some(cmd) = self.registry.get(&parsed.name) else {
            debug!(name = %parsed.name, "unknown command");
            return CommandResult::from_error(&ShellError::CommandNotFound { name: parsed.name });
        };

        debug!(command = cmd.name(), args = ?parsed.args, "dispatch");
        let result = match cmd.execute(&parsed.args, &mut ctx).await {
            Ok(result) => result,
            Err(e) => {
                warn!(command = cmd.name(), error = %e, "command failed");
                CommandResult::from_error(&e)
            }
        };

        let result = match &parsed.redirect {
            Some(redirect) => redirect_output(ctx.fs, redirect, result),
            None => result,
        };
        self.settle(result)
    }

    /// Move a requested continuation into the pending slot.
    fn settle(&mut self, mut result: CommandResult) -> CommandResult {
        self.pending = result.continuation.take();
        result
    }

    /// True while the next line goes to a continuation instead of dispatch.
    pub fn is_awaiting_input(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cwd(&self) -> String {
        self.fs.current_path()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn fs(&self) -> &dyn FileSystem {
        &*self.fs
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

/// Write a result's text into the redirect target.
///
/// Error results pass through untouched. Styled output is written without
/// its styling. Text gets exactly one trailing newline; empty output still
/// creates or truncates the target.
fn redirect_output(fs: &mut dyn FileSystem, redirect: &Redirect, result: CommandResult) -> CommandResult {
    if result.kind == MessageKind::Error {
        return result;
    }

    let Some(mut content) = result.output.plain_text() else {
        return CommandResult::from_error(&ShellError::RedirectUnsupported);
    };
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }

    let written = match redirect.mode {
        RedirectMode::Overwrite => fs.write_file(&redirect.path, &content),
        RedirectMode::Append => fs.append_file(&redirect.path, &content),
    };
    if let Err(source) = written {
        let err = ShellError::Redirect { path: redirect.path.clone(), source };
        warn!(error = %err, "redirect failed");
        return CommandResult::from_error(&err);
    }

    debug!(path = %redirect.path, mode = %redirect.mode, bytes = content.len(), "redirected output");
    CommandResult {
        output: Output::Empty,
        kind: MessageKind::System,
        error: None,
        continuation: result.continuation,
    }
}
