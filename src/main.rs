use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod filter;
mod ui;
mod view;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("brickdex=debug,info")
    } else {
        EnvFilter::new("brickdex=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Browse(args) => {
            ui::browse::run(&cli::catalog_source(args.catalog.as_deref()))?;
        }
        cli::Commands::List(args) => {
            cli::list::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Categories(args) => {
            cli::categories::run(args, cli.format)?;
        }
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Export(args) => {
            cli::export::run(args)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
