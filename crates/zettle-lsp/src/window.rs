use std::path::Path;
use tower_lsp::lsp_types::{MessageActionItem, MessageType, ShowDocumentParams, Url};
use tower_lsp::Client;
use zettle_core::host::Window;

/// `Window` backed by LSP client requests.
///
/// LSP has no free-text prompt, so the input panel is answered by the
/// name passed with the command, or accepts the default.
pub struct LspWindow {
    client: Client,
    name: Option<String>,
}

impl LspWindow {
    pub fn new(client: Client, name: Option<String>) -> Self {
        Self { client, name }
    }
}

#[tower_lsp::async_trait]
impl Window for LspWindow {
    async fn show_quick_pick(&self, items: &[String]) -> Option<usize> {
        let actions = items
            .iter()
            .map(|title| MessageActionItem {
                title: title.clone(),
                properties: Default::default(),
            })
            .collect();

        match self
            .client
            .show_message_request(MessageType::INFO, "Select a Zettelkasten", Some(actions))
            .await
        {
            Ok(Some(choice)) => items.iter().position(|item| *item == choice.title),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Quick pick failed: {}", e);
                None
            }
        }
    }

    async fn show_input_panel(&self, _caption: &str, initial: &str) -> Option<String> {
        Some(self.name.clone().unwrap_or_else(|| initial.to_string()))
    }

    async fn open_file(&self, path: &Path) {
        let Ok(uri) = Url::from_file_path(path) else {
            log::warn!("Cannot open {:?}: not an absolute path", path);
            return;
        };
        let params = ShowDocumentParams {
            uri,
            external: None,
            take_focus: Some(true),
            selection: None,
        };
        if let Err(e) = self.client.show_document(params).await {
            log::warn!("Failed to open {:?}: {}", path, e);
        }
    }

    async fn show_error(&self, message: &str) {
        self.client
            .show_message(MessageType::ERROR, message.to_string())
            .await;
    }
}
