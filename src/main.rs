mod app;
mod color;
mod config;
mod covers;
mod input;
mod library;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use library::{Library, ReadStatus};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shelf", version, about = "Terminal library tracker with cover-colored cards")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print the library grouped by read status (headless).
    List {
        /// Only print one column (available, reading or finished).
        #[arg(long)]
        status: Option<ReadStatus>,
    },
    /// Extract the dominant color of an image and print its card palette.
    Palette {
        image: PathBuf,
        /// Print the palette as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Store the UI theme in the config file (`mono` or `paper`).
    Theme {
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    init_tracing(&cfg, matches!(command, Command::Tui))?;

    match command {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::List { status } => {
            let library = if cfg.library.sample_books {
                Library::with_samples()
            } else {
                Library::new()
            };
            print_library(&library, status);
        }
        Command::Palette { image, json } => {
            let palette = covers::load_palette(&image)?;
            if json {
                let hooks: serde_json::Map<String, serde_json::Value> = palette
                    .style_hooks()
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::String(v)))
                    .collect();
                let v = serde_json::json!({ "palette": palette, "hooks": hooks });
                println!("{}", serde_json::to_string_pretty(&v)?);
            } else {
                println!("dominant  {}", palette.dominant);
                for (name, value) in palette.style_hooks() {
                    println!("{name:<24}{value}");
                }
            }
        }
        Command::Theme { name } => {
            if !matches!(name.as_str(), "mono" | "paper") {
                anyhow::bail!("unknown theme {name:?} (expected mono or paper)");
            }
            let mut cfg = cfg;
            cfg.theme.name = name;
            config::save(&cfg, cli.config.as_deref()).context("save config")?;
            println!("Updated theme in config.");
        }
    }

    Ok(())
}

/// The TUI owns the terminal, so it logs to a file instead of stderr.
fn init_tracing(cfg: &config::Config, tui_mode: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log.max_level());

    if tui_mode {
        let path = cfg.paths.log_file();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn print_library(library: &Library, only: Option<ReadStatus>) {
    if library.is_empty() {
        println!("Library is empty.");
        return;
    }
    for status in ReadStatus::ALL {
        if only.is_some_and(|s| s != status) {
            continue;
        }
        println!("{} ({})", status.label(), library.count(status));
        for (i, book) in library.by_status(status).enumerate() {
            let year = book
                .year_published()
                .map(|y| format!(" ({y})"))
                .unwrap_or_default();
            println!("  {:02}. {} by {}{}", i + 1, book.title(), book.author(), year);
        }
    }
}
