//! modlog command line.
//!
//! Loads a logger config file into a registry backed by the tracing sink,
//! then checks it, prints it, emits through it, or keeps it hot-reloaded.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use modlog::config::{load_config, ConfigWatcher, ModlogConfig};
use modlog::observability::init_subscriber;
use modlog::{Level, Registry, TracingSink};

#[derive(Parser)]
#[command(name = "modlog")]
#[command(about = "Per-module log level and prefix filtering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file and list the resolved loggers
    Check { config: PathBuf },
    /// Print the resolved logger configurations as JSON
    Show { config: PathBuf },
    /// Emit one message through a configured logger
    Emit {
        config: PathBuf,
        logger: String,
        /// fatal, error, warn, verbose, info or debug
        level: String,
        #[arg(required = true)]
        values: Vec<String>,
        /// Treat the first value as a printf-style template
        #[arg(short, long)]
        template: bool,
    },
    /// Apply a config file and reload it on change until Ctrl-C
    Watch { config: PathBuf },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => {
            let config = load_config(&config)?;
            for (name, logger) in config.logger_configs() {
                println!("{}\t{}\t{:?}", name, logger.threshold, logger.prefix);
            }
        }
        Commands::Show { config } => {
            let (_, registry) = load_registry(&config)?;
            println!("{}", serde_json::to_string_pretty(&registry.snapshot())?);
        }
        Commands::Emit {
            config,
            logger,
            level,
            values,
            template,
        } => {
            let (config, registry) = load_registry(&config)?;
            init_subscriber(&config.subscriber)?;
            emit(&registry, &logger, &level, &values, template)?;
        }
        Commands::Watch { config: path } => {
            let (config, registry) = load_registry(&path)?;
            init_subscriber(&config.subscriber)?;
            watch(&path, registry).await?;
        }
    }

    Ok(())
}

fn load_registry(path: &Path) -> Result<(ModlogConfig, Registry), Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    let registry = Registry::new(Arc::new(TracingSink::new()));
    registry.apply(config.logger_configs());
    Ok((config, registry))
}

fn emit(
    registry: &Registry,
    name: &str,
    level: &str,
    values: &[String],
    template: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let logger = registry.get_or_create(name);

    if template {
        let (first, rest) = values.split_first().ok_or("template requires a value")?;
        let rest: Vec<&dyn Display> = rest.iter().map(|v| v as &dyn Display).collect();
        if level.eq_ignore_ascii_case("fatal") {
            logger.fatalf(first, &rest);
            return Ok(());
        }
        match level.parse::<Level>()? {
            Level::Error => logger.errorf(first, &rest),
            Level::Warn => logger.warnf(first, &rest),
            Level::Verbose => logger.verbosef(first, &rest),
            Level::Info => logger.infof(first, &rest),
            Level::Debug => logger.debugf(first, &rest),
            Level::Disabled => return Err("cannot emit at level NOLOG".into()),
        }
        return Ok(());
    }

    let values: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();
    if level.eq_ignore_ascii_case("fatal") {
        logger.fatal(&values);
        return Ok(());
    }
    match level.parse::<Level>()? {
        Level::Error => logger.error(&values),
        Level::Warn => logger.warn(&values),
        Level::Verbose => logger.verbose(&values),
        Level::Info => logger.info(&values),
        Level::Debug => logger.debug(&values),
        Level::Disabled => return Err("cannot emit at level NOLOG".into()),
    }
    Ok(())
}

async fn watch(path: &Path, registry: Registry) -> Result<(), Box<dyn std::error::Error>> {
    let log = registry.get_or_create("modlog");
    let (watcher, mut updates) = ConfigWatcher::new(path);
    let _watcher = watcher.run()?;

    log.infof("watching %s with %d loggers", &[&path.display(), &registry.len()]);

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(config) => {
                    let loggers = config.logger_configs();
                    let count = loggers.len();
                    registry.apply(loggers);
                    log.infof("reloaded %d logger configs", &[&count]);
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                log.info(&[&"shutting down"]);
                break;
            }
        }
    }

    Ok(())
}
