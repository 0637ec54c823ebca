//! Zettle LSP Server Binary Entry Point

use std::sync::Arc;
use tower_lsp::Server;
use zettle_core::vfs::PhysicalFileSystem;
use zettle_lsp::create_lsp_service;

#[tokio::main]
async fn main() {
    env_logger::init();

    log::info!("Zettle LSP Server starting, listening on stdin/stdout");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_lsp_service(Arc::new(PhysicalFileSystem));
    log::info!("LSP service created, waiting for client connection");

    Server::new(stdin, stdout, socket).serve(service).await;
}
