use clap::Parser;
use std::io::{BufRead, IsTerminal, Read, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use webterm::commands::Control;
use webterm::{CommandResult, MessageKind, Output, Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "webterm")]
#[command(about = "A simulated single-user terminal over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Execute lines from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// Starting directory, created if missing
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// User name reported by whoami
    #[arg(long = "user")]
    user: Option<String>,

    /// Output one JSON object per result (output, kind, error)
    #[arg(long = "json")]
    json: bool,

    /// Disable ANSI colors in listings
    #[arg(long = "no-color")]
    no_color: bool,

    /// Script file to execute, one command per line
    #[arg()]
    script_file: Option<String>,
}

fn print_result(result: &CommandResult, cli: &Cli) {
    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "output": result.text(),
                "kind": result.kind,
                "error": result.error,
            })
        );
        return;
    }

    if let Output::Control(Control::ClearScreen) = result.output {
        print!("\x1B[2J\x1B[H");
        let _ = std::io::stdout().flush();
        return;
    }
    if result.output.is_empty() {
        return;
    }
    let text = result.output.render(!cli.no_color);
    if result.kind == MessageKind::Error {
        eprintln!("{}", text);
    } else {
        println!("{}", text);
    }
}

async fn interactive(shell: &mut Shell, cli: &Cli) {
    print_result(&shell.exec("motd").await, cli);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if shell.is_awaiting_input() {
            print!("> ");
        } else {
            print!("{}@webterm:{}$ ", shell.user(), shell.cwd());
        }
        let _ = std::io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            println!();
            break;
        };
        let line = line.trim_end_matches('\r');

        let result = shell.exec(line).await;
        print_result(&result, cli);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut shell = Shell::new(ShellOptions {
        cwd: cli.cwd.clone(),
        user: cli.user.clone(),
        ..Default::default()
    });

    // Determine script source: -c, file, stdin, or an interactive prompt
    let script = if let Some(s) = cli.script.clone() {
        s
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                return ExitCode::FAILURE;
            }
        }
    } else if std::io::stdin().is_terminal() {
        interactive(&mut shell, &cli).await;
        return ExitCode::SUCCESS;
    } else {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Error: Cannot read stdin: {}", e);
            return ExitCode::FAILURE;
        }
        buf
    };

    let mut failed = false;
    for line in script.lines() {
        let result = shell.exec(line).await;
        failed |= result.is_error();
        print_result(&result, &cli);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
