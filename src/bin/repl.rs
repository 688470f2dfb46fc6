use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use redirect_core::config::CHAMPION_MAPPING_FILE_NAME;
use redirect_core::router::Route;
use redirect_core::Resolver;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

/// Interactive resolver: type `champion/role`, see where it redirects.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Champion alias file
    #[arg(short, long, default_value = CHAMPION_MAPPING_FILE_NAME)]
    mappings: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let resolver = Resolver::from_mapping_file(&cli.mappings)
        .with_context(|| format!("Could not load {}", cli.mappings.display()))?;

    println!(
        "Champion redirect shell. {} aliases, {} role prefixes. Type 'exit' to quit.",
        resolver.aliases().len(),
        resolver.roles().len()
    );
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let query = input.trim();

        match query {
            "exit" => break,
            "" => continue,
            q => print_resolution(q, &resolver),
        }
    }
    Ok(())
}

fn print_resolution(query: &str, resolver: &Resolver) {
    let route = Route::parse(query);
    match (&route, route.resolve(resolver)) {
        (Route::Search { champion, role }, Some(dest)) => {
            let champion_note = if resolver.aliases().lookup(champion).is_some() {
                "alias".green()
            } else {
                "pass-through".yellow()
            };
            println!("Champion: {} ({})", dest.champion.as_str().bold(), champion_note);

            match (role, dest.role) {
                (Some(_), Some(id)) => println!("Role:     {}", id.as_str().bold()),
                (Some(text), None) => println!("Role:     {} ({})", text.as_str().dim(), "dropped".red()),
                (None, _) => println!("Role:     -"),
            }
        }
        _ => println!("Home"),
    }
    println!("-> {}", route.destination(resolver).cyan());
}
