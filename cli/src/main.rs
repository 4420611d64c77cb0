use alehp_cli::CliContext;
use alehp_cli::commands;
use alehp_cli::logging;
use alehp_cli::readline;
use clap::{Parser, Subcommand};
use std::io::Write;

fn main() -> Result<(), String> {
    logging::init();
    let mut ctx = CliContext::new();

    loop {
        let line = readline()?;
        if line.is_empty() {
            // stdin closed
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the canonical dataset from the source workbook
    Build {
        #[arg(short, long)]
        workbook: Option<String>,
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Set the armor selector (Light/Medium/Heavy/All) and re-render
    Armor { value: String },
    /// Set the hull selector (DD/CL/CA/CB/AE/All) and re-render
    Hull { value: String },
    /// Re-render with the current selectors
    Show,
    Config,
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "alehp".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Build { workbook, out }) => {
            commands::build_dataset(ctx, workbook.as_deref(), out.as_deref())?
        }
        Some(Commands::Armor { value }) => commands::set_armor(ctx, value)?,
        Some(Commands::Hull { value }) => commands::set_hull(ctx, value)?,
        Some(Commands::Show) => commands::show_chart(ctx)?,
        Some(Commands::Config) => commands::show_settings(ctx),
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
