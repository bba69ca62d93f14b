//! CSS Variable Language Server Implementation
//!
//! Provides Language Server Protocol features for custom properties using tower-lsp.

use std::sync::{Arc, Mutex};
use serde_json::Value;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

use crate::config::ViewerConfig;
use crate::css::color_provider::VariableColorProvider;
use crate::css::commands::execute_command;
use crate::css::constants::ALL_COMMANDS;
use crate::css::hover::VariableHoverProvider;
use crate::css::navigation::definition_at;
use crate::css::session::ViewerSession;
use crate::error::ViewerError;
use crate::logging;

/// CSS Variable Language Server
pub struct CssVariableLanguageServer {
    client: Client,
    /// tower-lsp requires LanguageServer implementations to be Send + Sync,
    /// and handlers only get &self
    state: Arc<Mutex<ViewerSession>>,
}

impl CssVariableLanguageServer {
    /// Create a new language server with an empty session
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(ViewerSession::default())),
        }
    }

    /// Apply a configuration to the session and the logger
    fn apply_config(&self, config: ViewerConfig) {
        if let Some(level) = config.level_filter() {
            logging::set_level(level);
        }
        if let Ok(mut state) = self.state.lock() {
            log::info!("Applying configuration: {:?}", config);
            state.set_config(config);
        } else {
            log::error!("[apply_config] Failed to acquire state lock");
        }
    }
}

fn to_rpc_error(error: ViewerError) -> Error {
    match error {
        ViewerError::UnknownCommand { .. } => Error::method_not_found(),
        other => Error::invalid_params(other.to_string()),
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for CssVariableLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.apply_config(ViewerConfig::from_value_or_default(params.initialization_options));

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                color_provider: Some(ColorProviderCapability::Simple(true)),
                definition_provider: Some(OneOf::Left(true)),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: ALL_COMMANDS.iter().map(|command| command.to_string()).collect(),
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "CSS Variable Language Server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.apply_config(ViewerConfig::from_value_or_default(Some(params.settings)));
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        let uri = document.uri.clone();

        let result = match self.state.lock() {
            Ok(mut state) => state.open_document(document.uri, &document.language_id, document.text, document.version),
            Err(_) => {
                log::error!("[did_open] Failed to acquire state lock");
                return;
            }
        };

        match result {
            Ok(()) => {
                self.client
                    .log_message(MessageType::INFO, format!("Opened stylesheet: {}", uri))
                    .await;
            }
            Err(e) => log::info!("Ignoring {}: {}", uri, e),
        }
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full sync: the last change holds the whole text
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };

        if let Ok(mut state) = self.state.lock() {
            if state.get_document(&uri).is_none() {
                return;
            }
            if let Err(e) = state.update_document(&uri, change.text, version) {
                log::warn!("[did_change] {}", e);
            }
        } else {
            log::error!("[did_change] Failed to acquire state lock");
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        if let Ok(mut state) = self.state.lock() {
            state.close_document(&uri);
        }
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Ok(state) = self.state.lock() else {
            log::error!("[hover] Failed to acquire state lock");
            return Ok(None);
        };
        let Some(document) = state.get_document(&uri) else {
            return Ok(None);
        };

        let provider = VariableHoverProvider::new(state.color_classifier());
        Ok(provider.hover(document, position))
    }

    async fn goto_definition(&self, params: GotoDefinitionParams) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Ok(state) = self.state.lock() else {
            log::error!("[goto_definition] Failed to acquire state lock");
            return Ok(None);
        };
        let Some(document) = state.get_document(&uri) else {
            return Ok(None);
        };

        let target = definition_at(document.extraction(), document.content(), document.line_index(), position);
        log::debug!("Definition at {:?} in {}: {:?}", position, uri, target);

        Ok(target.map(|range| GotoDefinitionResponse::Scalar(Location { uri, range })))
    }

    async fn document_color(&self, params: DocumentColorParams) -> Result<Vec<ColorInformation>> {
        let uri = params.text_document.uri;

        let colors = if let Ok(state) = self.state.lock() {
            match state.get_document(&uri) {
                Some(document) => VariableColorProvider::new(state.color_classifier())
                    .provide_document_colors(document.extraction()),
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };

        Ok(colors)
    }

    async fn color_presentation(&self, params: ColorPresentationParams) -> Result<Vec<ColorPresentation>> {
        let Ok(state) = self.state.lock() else {
            return Ok(Vec::new());
        };
        let current = state
            .get_document(&params.text_document.uri)
            .and_then(|document| document.text_in(params.range));

        Ok(VariableColorProvider::new(state.color_classifier()).provide_color_presentations(
            &params.color,
            params.range,
            current,
        ))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        log::info!("Executing command {}", params.command);

        let Ok(state) = self.state.lock() else {
            log::error!("[execute_command] Failed to acquire state lock");
            return Err(Error::internal_error());
        };

        match execute_command(&state, &params.command, &params.arguments) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("Command {} failed: {}", params.command, e);
                Err(to_rpc_error(e))
            }
        }
    }
}

/// Create and start the language server on stdio
pub async fn start_language_server() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(CssVariableLanguageServer::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
