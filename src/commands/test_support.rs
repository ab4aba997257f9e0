// src/commands/test_support.rs
use super::registry::{create_default_registry, CommandRegistry};
use super::types::{Command, CommandContext, CommandResult};
use crate::fs::InMemoryFs;
use crate::store::MemoryStore;

/// Owns everything a command context borrows.
pub struct TestEnv {
    pub fs: InMemoryFs,
    pub registry: CommandRegistry,
    pub store: MemoryStore,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            fs: InMemoryFs::with_default_layout(),
            registry: create_default_registry(),
            store: MemoryStore::new(),
        }
    }

    pub fn ctx(&mut self) -> CommandContext<'_> {
        CommandContext {
            fs: &mut self.fs,
            registry: &self.registry,
            store: &mut self.store,
            user: "guest",
            home: "/users/guest",
        }
    }

    /// Execute a command, folding a returned error into an error result.
    pub async fn run(&mut self, cmd: &dyn Command, args: &[&str]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut ctx = self.ctx();
        match cmd.execute(&args, &mut ctx).await {
            Ok(result) => result,
            Err(e) => CommandResult::from_error(&e),
        }
    }

    /// Feed a line to the continuation a result requested.
    pub fn resume(&mut self, result: CommandResult, line: &str) -> CommandResult {
        let next = result.continuation.expect("result has no continuation");
        let mut ctx = self.ctx();
        match next(line.to_string(), &mut ctx) {
            Ok(result) => result,
            Err(e) => CommandResult::from_error(&e),
        }
    }
}
