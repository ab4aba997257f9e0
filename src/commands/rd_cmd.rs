use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct RdCommand;

#[async_trait]
impl Command for RdCommand {
    fn name(&self) -> &'static str {
        "rd"
    }

    fn description(&self) -> &'static str {
        "Remove directory"
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let Some(dir) = args.first() else {
            return Ok(CommandResult::usage("Usage: rd <directory_name>"));
        };
        ctx.fs.remove_directory(dir)?;
        Ok(CommandResult::system(format!("Directory removed: {}", dir)))
    }
}
