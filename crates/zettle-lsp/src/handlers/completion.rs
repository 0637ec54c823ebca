use crate::conversion::{candidate_to_completion_item, lsp_position_to_offset, word_prefix};
use crate::document::DocumentView;
use crate::state::GlobalState;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;
use zettle_core::completion::trigger_at;

/// Handle "textDocument/completion" request
pub async fn handle_completion(
    client: &Client,
    state: &GlobalState,
    params: CompletionParams,
) -> Result<Option<CompletionResponse>> {
    let uri = &params.text_document_position.text_document.uri;
    let position = params.text_document_position.position;

    // 1. Get document content
    let document_text = {
        let cache = state.document_cache.read().await;
        cache.get(uri).cloned()
    };

    let Some(document_text) = document_text else {
        return Ok(None);
    };

    // 2. Locate the cursor and the word typed so far
    let Some(offset) = lsp_position_to_offset(&document_text, position) else {
        return Ok(None);
    };
    let prefix = word_prefix(&document_text, offset);

    // 3. Ask the engine
    let config = state.config().await;
    let view = DocumentView::new(&document_text, uri.to_file_path().ok());

    let candidates = match state.engine.complete(&config, &view, offset, prefix) {
        Ok(Some(candidates)) => candidates,
        Ok(None) => return Ok(None),
        Err(e) => {
            log::error!("Completion failed: {}", e);
            client.show_message(MessageType::ERROR, e.to_string()).await;
            return Ok(None);
        }
    };

    let trigger = trigger_at(&view, offset, prefix);

    let items = candidates
        .into_iter()
        .map(|candidate| candidate_to_completion_item(candidate, trigger))
        .collect();

    Ok(Some(CompletionResponse::Array(items)))
}
