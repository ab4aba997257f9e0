use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn description(&self) -> &'static str {
        "Displays current user"
    }

    async fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::success(ctx.user))
    }
}
