use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use redirect_core::config::Config;
use redirect_core::router::Route;
use redirect_core::server::Server;
use redirect_core::{ChampionId, Resolver, RoleId};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

/// Config, load or bind failure
const TOOL_ERROR: u8 = 2;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct CommonArgs {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Champion alias file, one `<alias> <championID>` pair per line
    #[arg(short, long, global = true)]
    mappings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the redirect service (default)
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8080
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Print the destination for each path, e.g. `ahri/mid`
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print a JSON array instead of one destination per line
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ResolvedPath<'a> {
    path: &'a str,
    champion: Option<ChampionId>,
    role: Option<RoleId>,
    destination: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(TOOL_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.common.config.as_deref())?;
    if let Some(mappings) = cli.common.mappings {
        config.mapping_file = mappings;
    }

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            serve(config)
        }
        Command::Resolve { paths, json } => resolve(&config, &paths, json),
    }
}

fn load_resolver(config: &Config) -> Result<Resolver> {
    Resolver::from_mapping_file(&config.mapping_file).context("Could not build champion lookup tables")
}

fn serve(config: Config) -> Result<()> {
    // Tables must be complete before the listener accepts anything.
    let resolver = Arc::new(load_resolver(&config)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Could not start async runtime")?;

    runtime.block_on(async move {
        let server = Server::bind(config.bind, resolver)
            .await?
            .header_read_timeout(Duration::from_secs(config.header_read_timeout_secs));
        tokio::select! {
            result = server.run() => result?,
            _ = tokio::signal::ctrl_c() => log::info!("Shutting down."),
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn resolve(config: &Config, paths: &[String], json: bool) -> Result<()> {
    let resolver = load_resolver(config)?;

    let resolved: Vec<ResolvedPath> = paths
        .iter()
        .map(|path| {
            let route = Route::parse(path);
            let dest = route.resolve(&resolver);
            ResolvedPath {
                path: path.as_str(),
                champion: dest.as_ref().map(|d| d.champion.clone()),
                role: dest.as_ref().and_then(|d| d.role),
                destination: route.destination(&resolver),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        for item in &resolved {
            println!("{}", item.destination);
        }
    }
    Ok(())
}
