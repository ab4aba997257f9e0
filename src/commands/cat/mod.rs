// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn description(&self) -> &'static str {
        "Concatenate and print files"
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        if args.is_empty() {
            return Ok(CommandResult::usage("Usage: cat <filename>"));
        }

        let mut stdout = String::new();
        for file in args {
            stdout.push_str(&ctx.fs.read_file(file)?);
        }
        Ok(CommandResult::success(stdout))
    }
}
