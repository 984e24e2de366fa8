mod chat;
mod cli;
mod setup;
mod terminal;
mod upload;

use std::process::ExitCode;

use parley_client::{ConversationSessionClient, DocumentUploadClient, HttpTransport};
use parley_common::ParleyError;
use parley_config::ParleyConfig;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};
use terminal::TerminalView;

fn init_logging(args: &Args, config: &ParleyConfig) {
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.directive());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "parley=info".parse().expect("static directive")),
            ),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    // An explicit --config must load; the default location falls back to defaults.
    let (config, config_error) = match parley_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if args.config.is_some() => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
        Err(e) => (ParleyConfig::default(), Some(e)),
    };

    init_logging(&args, &config);
    tracing::info!("Parley v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let result = match args.command {
        Command::Chat => run_chat(&config).await,
        Command::Upload {
            file,
            token,
            categories,
            output,
        } => {
            let request = upload::UploadRequest {
                file,
                token,
                categories,
                output_dir: output.unwrap_or_else(|| config.upload.output_dir.clone()),
            };
            let client = DocumentUploadClient::new(setup::upload_settings(&config));
            upload::run(&client, &request, &mut std::io::stdout())
                .await
                .map_err(|e| ParleyError::Upload(e.to_string()))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_chat(config: &ParleyConfig) -> Result<(), ParleyError> {
    let transport = HttpTransport::new(config.exchange_url(), setup::wire_format(config));
    let store = setup::session_store(config)?;
    let client = ConversationSessionClient::new(transport, store, TerminalView::new(std::io::stdout()))
        .with_storage_key(config.session.storage_key.clone());

    // Every run starts a fresh conversation.
    client
        .reset()
        .map_err(|e| ParleyError::Store(e.to_string()))?;
    tracing::info!(url = %config.exchange_url(), "chat session ready");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    chat::run(&client, stdin).await
}
