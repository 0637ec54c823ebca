use crate::config::settings_section;
use crate::state::GlobalState;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

pub async fn handle_did_change_configuration(
    client: &Client,
    state: &GlobalState,
    params: DidChangeConfigurationParams,
) {
    let Some(parsed) = settings_section(&params.settings) else {
        return;
    };

    match parsed {
        Ok(new_settings) => {
            let references_changed = {
                let mut config_lock = state.config.write().await;
                let changed = config_lock.zettle_references_file_path
                    != new_settings.zettle_references_file_path;
                // The client's section is the whole configuration; unset keys are cleared.
                *config_lock = new_settings;
                changed
            };

            // The bibliography is memoized per session; a new path starts over.
            if references_changed {
                state.engine.citations().invalidate();
            }

            client
                .log_message(MessageType::INFO, "Zettle settings updated")
                .await;
        }
        Err(e) => {
            client
                .show_message(
                    MessageType::ERROR,
                    format!("Failed to parse updated settings: {}", e),
                )
                .await;
        }
    }
}
