// src/commands/date/mod.rs
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Write;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct DateCommand;

const DEFAULT_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// `None` when `fmt` holds a specifier chrono cannot render.
fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>, fmt: &str) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", dt.format(fmt)).ok()?;
    Some(out)
}

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str { "date" }

    fn description(&self) -> &'static str {
        "Displays the current date and time"
    }

    async fn execute(&self, args: &[String], _ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let mut utc = false;
        let mut format_str: Option<&str> = None;

        for a in args {
            if a == "-u" || a == "--utc" {
                utc = true;
            } else if let Some(fmt) = a.strip_prefix('+') {
                format_str = Some(fmt);
            } else {
                return Ok(CommandResult::usage(format!("date: invalid option '{}'", a)));
            }
        }

        let fmt = format_str.unwrap_or(DEFAULT_FORMAT);
        let output = if utc {
            format_date(&Utc::now(), fmt)
        } else {
            format_date(&Local::now(), fmt)
        };
        Ok(match output {
            Some(text) => CommandResult::success(text),
            None => CommandResult::usage(format!("date: invalid format '{}'", fmt)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use crate::commands::ErrorKind;

    #[tokio::test]
    async fn test_date_custom_format() {
        let mut env = TestEnv::new();
        let result = env.run(&DateCommand, &["-u", "+%Y"]).await;
        let year: i32 = result.text().parse().unwrap();
        assert!(year >= 2024);
    }

    #[tokio::test]
    async fn test_date_default_format() {
        let mut env = TestEnv::new();
        let result = env.run(&DateCommand, &[]).await;
        assert!(result.text().contains("GMT"));
    }

    #[tokio::test]
    async fn test_date_rejects_unknown_option() {
        let mut env = TestEnv::new();
        let result = env.run(&DateCommand, &["-x"]).await;
        assert_eq!(result.error, Some(ErrorKind::Usage));

        let result = env.run(&DateCommand, &["+%Q"]).await;
        assert_eq!(result.error, Some(ErrorKind::Usage));
    }
}
