use std::io;

use clap::{Parser, Subcommand};

use ssrfixture::fixtures::register_builtin;
use ssrfixture::{run_worker, FixtureRegistry, RenderConfig};

#[derive(Parser)]
#[command(name = "ssrfixture", version, about = "Render registered fixtures to HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one fixture and print the markup
    Render {
        /// Registered fixture name
        fixture: String,
        /// Props as a JSON object
        #[arg(long, default_value = "{}")]
        props: String,
        /// Prefix the output with <!doctype html>
        #[arg(long)]
        doctype: bool,
    },
    /// Serve jobs over stdin/stdout, one JSON job per line
    Worker,
    /// List registered fixture names
    List,
}

fn build_registry(config: RenderConfig) -> FixtureRegistry {
    let mut registry = FixtureRegistry::with_config(config);
    register_builtin(&mut registry);
    registry
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            fixture,
            props,
            doctype,
        } => {
            let registry = build_registry(RenderConfig {
                doctype,
                ..Default::default()
            });
            let props: serde_json::Value = serde_json::from_str(&props)?;
            let html = registry.invoke(&fixture, props)?;
            println!("{}", html);
        }
        Command::Worker => {
            let registry = build_registry(RenderConfig::default());
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_worker(&registry, stdin.lock(), stdout.lock())?;
        }
        Command::List => {
            let registry = build_registry(RenderConfig::default());
            for name in registry.names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
