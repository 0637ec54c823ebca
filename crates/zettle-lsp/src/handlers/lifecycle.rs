use crate::config::{load_workspace_config, settings_from_value, CONFIG_FILE_NAME};
use crate::protocol::{NEW_ZETTLE_COMMAND, NEW_ZETTLE_IN_ZETTELKASTEN_COMMAND};
use crate::state::GlobalState;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;
use zettle_core::{DirectoryRegistry, ZettleConfig};

/// Handle "initialize" request
pub async fn handle_initialize(
    client: &Client,
    state: &GlobalState,
    params: InitializeParams,
) -> Result<InitializeResult> {
    let mut config = ZettleConfig::default();

    if let Some(root_path) = params.root_uri.and_then(|uri| uri.to_file_path().ok()) {
        client
            .log_message(
                MessageType::INFO,
                format!("Initializing workspace at: {:?}", root_path),
            )
            .await;

        match load_workspace_config(&*state.fs, &root_path) {
            Ok(Some(workspace_config)) => {
                client
                    .log_message(MessageType::INFO, format!("Loaded {}", CONFIG_FILE_NAME))
                    .await;
                config = workspace_config;
            }
            Ok(None) => {}
            Err(e) => {
                client.show_message(MessageType::ERROR, e).await;
            }
        }
    } else {
        client
            .log_message(MessageType::WARNING, "No rootUri provided!")
            .await;
    }

    if let Some(options) = &params.initialization_options {
        match settings_from_value(options) {
            Some(Ok(settings)) => config.merge(settings),
            Some(Err(e)) => {
                client
                    .show_message(
                        MessageType::ERROR,
                        format!("Failed to parse initialization options: {}", e),
                    )
                    .await;
            }
            None => {}
        }
    }

    // Report problems early; they are re-checked on every request anyway.
    match DirectoryRegistry::new(&config, &*state.fs).resolve() {
        Ok(stores) => {
            client
                .log_message(
                    MessageType::INFO,
                    format!("Found {} note stores:", stores.len()),
                )
                .await;
            for (name, path) in &stores {
                client
                    .log_message(MessageType::INFO, format!(" - {}: {:?}", name, path))
                    .await;
            }
        }
        Err(e) => {
            client.log_message(MessageType::WARNING, e.to_string()).await;
        }
    }

    *state.config.write().await = config;

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(vec![
                    "[".to_string(),
                    "(".to_string(),
                    "@".to_string(),
                ]),
                all_commit_characters: None,
                resolve_provider: Some(false),
                work_done_progress_options: Default::default(),
                completion_item: Default::default(),
            }),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![
                    NEW_ZETTLE_COMMAND.to_string(),
                    NEW_ZETTLE_IN_ZETTELKASTEN_COMMAND.to_string(),
                ],
                work_done_progress_options: Default::default(),
            }),
            ..Default::default()
        },
        server_info: Some(ServerInfo {
            name: "zettle".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
    })
}
