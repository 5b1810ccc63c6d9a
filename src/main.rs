use clap::{Parser, Subcommand};
use snapkeep::cancel::CancellationToken;
use snapkeep::config::{self, ArchiverConfig};
use snapkeep::imaging::RustBackend;
use snapkeep::pipeline::Archiver;
use snapkeep::retention;
use snapkeep::watch::WatchLoop;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::info;

#[derive(Parser)]
#[command(name = "snapkeep")]
#[command(about = "Directory-watching photo archiver with date-partitioned storage")]
#[command(long_about = "\
Directory-watching photo archiver with date-partitioned storage

Watches a source directory and archives every file that appears in it:
recognized photos (jpg, jpeg, png, gif) are optionally resized first,
then files are moved into an archive laid out by date:

  archived/
  └── 2026/
      └── 8/
          └── 8/
              ├── p_vacation_done.png   # archived original (with affixes)
              └── vacation.png          # resized copy (when enabled)

Configuration lives in snapkeep.toml. Run 'snapkeep gen-config' to
generate a documented template.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "snapkeep.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Watch the source directory and archive new files until terminated
    Run,
    /// Run the retention sweep once and exit
    Sweep,
    /// Validate the config file without starting the watcher
    Check,
    /// Print a stock snapkeep.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run => {
            init_tracing();
            let config = ArchiverConfig::load(&cli.config)?;
            std::fs::create_dir_all(&config.dst_dir)?;

            if config.auto_delete {
                let stats =
                    retention::sweep(&config.dst_dir, config.delete_days, SystemTime::now());
                info!(
                    examined = stats.examined,
                    deleted = stats.deleted,
                    failed = stats.failed,
                    "retention sweep finished"
                );
            }

            let cancel = CancellationToken::new();
            let handler_token = cancel.clone();
            ctrlc::set_handler(move || {
                info!("received termination signal, shutting down");
                handler_token.cancel();
            })?;

            let archiver = Archiver::new(config, RustBackend::new());
            let watch_loop = WatchLoop::new(archiver, cancel);

            if watch_loop.archiver().config().run_on_init {
                let archived = watch_loop.process_backlog()?;
                info!(archived, "startup backlog finished");
            }

            watch_loop.run()?;
        }
        Command::Sweep => {
            init_tracing();
            let config = ArchiverConfig::load(&cli.config)?;
            if config.delete_days == 0 {
                return Err("delete_days must be positive to sweep".into());
            }
            let stats = retention::sweep(&config.dst_dir, config.delete_days, SystemTime::now());
            println!(
                "Sweep: {} examined, {} deleted, {} failed",
                stats.examined, stats.deleted, stats.failed
            );
        }
        Command::Check => {
            let config = ArchiverConfig::load(&cli.config)?;
            println!("Config OK");
            println!("  source:  {}", config.src_dir.display());
            println!("  archive: {}", config.dst_dir.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the global tracing subscriber: RUST_LOG wins, `info` otherwise.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
