use clap::{Parser, Subcommand};
use onair_cli::CliContext;
use onair_cli::commands;
use onair_cli::logging;
use onair_cli::readline;
use onair_cli::refresher;
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let ctx = CliContext::new();

    // Start the periodic refresh; it idles until a payload is loaded
    refresher::restart(&ctx).await;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "Shows the program currently on air")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read schedules from a payload file and refresh
    Load {
        #[arg(short, long)]
        path: String,
    },
    /// Refresh now, optionally as of an RFC 3339 instant
    Refresh {
        #[arg(long)]
        now: Option<String>,
    },
    /// Show the current program labels
    Show,
    Config,
    /// Show or hide the overlay
    Toggle,
    SetPosition {
        position: String,
    },
    SetResolution {
        width: i32,
        height: i32,
    },
    SetInterval {
        minutes: u32,
    },
    SetStation {
        kind: String,
    },
    SetUrl {
        url: String,
    },
    Save,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "onair".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Load { path }) => commands::load_payload(path, ctx).await,
        Some(Commands::Refresh { now }) => commands::refresh(now.as_deref(), ctx).await,
        Some(Commands::Show) => commands::show_program(ctx).await,
        Some(Commands::Config) => commands::show_settings(ctx).await,
        Some(Commands::Toggle) => commands::toggle_overlay(ctx).await,
        Some(Commands::SetPosition { position }) => commands::set_position(position, ctx).await,
        Some(Commands::SetResolution { width, height }) => {
            commands::set_resolution(*width, *height, ctx).await
        }
        Some(Commands::SetInterval { minutes }) => commands::set_interval(*minutes, ctx).await,
        Some(Commands::SetStation { kind }) => commands::set_station(kind, ctx).await,
        Some(Commands::SetUrl { url }) => commands::set_url(url, ctx).await,
        Some(Commands::Save) => commands::save(ctx).await,
        Some(Commands::Exit) => {
            commands::exit(ctx).await;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
