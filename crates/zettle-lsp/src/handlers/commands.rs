use crate::protocol::{
    NewZettleParams, NewZettleResult, NEW_ZETTLE_COMMAND, NEW_ZETTLE_IN_ZETTELKASTEN_COMMAND,
};
use crate::state::GlobalState;
use crate::window::LspWindow;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::Client;
use zettle_core::commands::{
    is_new_zettel_visible, new_zettel_in_directory, new_zettel_in_zettelkasten,
};
use zettle_core::host::Window;

/// Handle "workspace/executeCommand" request
pub async fn handle_execute_command(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let command_params: NewZettleParams = match params.arguments.first() {
        Some(first_arg) => serde_json::from_value(first_arg.clone())
            .map_err(|_| Error::invalid_params("Invalid params"))?,
        None => NewZettleParams::default(),
    };

    let window = LspWindow::new(client.clone(), command_params.name);

    let result = match params.command.as_str() {
        NEW_ZETTLE_COMMAND => {
            if !is_new_zettel_visible(&command_params.dirs) {
                return Err(Error::invalid_params("Exactly one directory is required"));
            }
            new_zettel_in_directory(&window, &*state.fs, &command_params.dirs[0]).await
        }
        NEW_ZETTLE_IN_ZETTELKASTEN_COMMAND => {
            let config = state.config().await;
            new_zettel_in_zettelkasten(&window, &*state.fs, &config).await
        }
        other => {
            return Err(Error::invalid_params(format!("Unknown command: {}", other)));
        }
    };

    let path = match result {
        Ok(path) => path,
        Err(e) => {
            log::error!("{} failed: {}", params.command, e);
            window.show_error(&e.to_string()).await;
            return Ok(None);
        }
    };

    let result = NewZettleResult {
        path: path.map(|p| p.to_string_lossy().to_string()),
    };
    serde_json::to_value(result).map(Some).map_err(|e| Error {
        code: tower_lsp::jsonrpc::ErrorCode::InternalError,
        message: format!("Failed to serialize results: {}", e).into(),
        data: None,
    })
}
