use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct MdCommand;

#[async_trait]
impl Command for MdCommand {
    fn name(&self) -> &'static str {
        "md"
    }

    fn description(&self) -> &'static str {
        "Make directory"
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let Some(dir) = args.first() else {
            return Ok(CommandResult::usage("Usage: md <directory_name>"));
        };
        ctx.fs.make_directory(dir)?;
        Ok(CommandResult::system(format!("Directory created: {}", dir)))
    }
}
