use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct MotdCommand;

pub const STORAGE_KEY_MOTD: &str = "webterm_motd";

pub const INITIAL_WELCOME_MESSAGE: &str =
    "Welcome to WebTerm OS v1.0. Type 'help' to see the available commands.";

fn save_motd(ctx: &mut CommandContext<'_>, text: &str) -> Result<CommandResult, ShellError> {
    ctx.store.set(STORAGE_KEY_MOTD, text)?;
    Ok(CommandResult::system("Message of the Day updated successfully."))
}

#[async_trait]
impl Command for MotdCommand {
    fn name(&self) -> &'static str {
        "motd"
    }

    fn description(&self) -> &'static str {
        "Display or edit the Message of the Day. Use -e to edit."
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        if args.first().map(String::as_str) == Some("-e") {
            if args.len() > 1 {
                return save_motd(ctx, &args[1..].join(" "));
            }
            return Ok(
                CommandResult::system("Entering edit mode. Please type the new MOTD below:")
                    .then(|line, ctx| save_motd(ctx, &line)),
            );
        }

        let current = ctx
            .store
            .get(STORAGE_KEY_MOTD)
            .unwrap_or_else(|| INITIAL_WELCOME_MESSAGE.to_string());
        Ok(CommandResult::system(current))
    }
}
