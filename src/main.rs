use std::env;
use std::process;

use css_variable_viewer::cli::{self, CliCommand};
use css_variable_viewer::css::server::start_language_server;
use css_variable_viewer::logging;
use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("css_variable_viewer");

    let command = match cli::parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(command) => command,
        Err(e) => {
            // Use eprintln for usage info since logger isn't initialized yet
            eprintln!("{}", e);
            eprintln!("{}", cli::usage(program));
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }
    info!("CSS Variable Viewer starting");
    info!("Command line arguments: {:?}", args);

    match command {
        CliCommand::Serve => {
            info!("Starting CSS variable language server on stdio");
            start_language_server().await;
            info!("Language server stopped");
        }
        CliCommand::Table { path, json, filter, config } => {
            match cli::run_table(&path, json, filter.as_deref(), config.as_deref()) {
                Ok(output) => print!("{}", output),
                Err(e) => {
                    error!("Failed to render {}: {}", path.display(), e);
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
    }

    info!("CSS Variable Viewer shutting down");
}
