//! `um` -- EIA public consultation feedback tracker CLI.
//!
//! This is the entry point for the umsögn system. It parses CLI arguments
//! with clap, resolves the runtime context, and dispatches to command
//! handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use cli::{Cli, CommentCommands, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // Install signal handlers for graceful shutdown.
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            // Second signal: force exit
            std::process::exit(1);
        }
        // First signal: exit cleanly
        std::process::exit(0);
    });

    // Parse CLI arguments
    let cli = Cli::parse();

    // Build runtime context from global args
    let ctx = RuntimeContext::from_global_args(&cli.global);

    // Set up logging based on verbosity
    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("um=debug,umsogn_storage=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Dispatch to command handler
    let result = match cli.command {
        Some(Commands::Init(args)) => commands::init::run(&ctx, &args),
        Some(Commands::Projects(args)) => commands::projects::run_list(&ctx, &args),
        Some(Commands::Project(args)) => commands::projects::run_show(&ctx, &args),
        Some(Commands::Comments(args)) => commands::comments::run(&ctx, &args),
        Some(Commands::Comment(CommentCommands::Add(args))) => {
            commands::comment::run_add(&ctx, &args)
        }
        Some(Commands::Comment(CommentCommands::Update(args))) => {
            commands::comment::run_update(&ctx, &args)
        }
        Some(Commands::Topics(args)) => commands::topics::run(&ctx, &args),
        Some(Commands::Metrics(args)) => commands::metrics::run(&ctx, &args),
        Some(Commands::Timeline(args)) => commands::timeline::run(&ctx, &args),
        Some(Commands::Meetings(args)) => commands::meetings::run(&ctx, &args),
        Some(Commands::Stakeholders(args)) => commands::stakeholders::run(&ctx, &args),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        // For JSON mode, output error as JSON
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
