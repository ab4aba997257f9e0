// src/commands/pwd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print name of current/working directory"
    }

    async fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::success(ctx.fs.current_path()))
    }
}
