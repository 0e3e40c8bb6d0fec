use blade_lsp::Analysis;
use blade_lsp::config::ServerConfig;
use clap::Parser;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

#[derive(Debug)]
struct Backend {
    client: Client,
    analysis: Analysis,
}

impl Backend {
    fn new(client: Client) -> Self {
        Self {
            client,
            analysis: Analysis::new(),
        }
    }

    async fn publish(&self, uri: Url, diagnostics: Vec<Diagnostic>) {
        tracing::debug!("{} diagnostics for {}", diagnostics.len(), uri);
        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }
}

fn capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::FULL),
                will_save: None,
                will_save_wait_until: None,
                save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                    include_text: Some(true),
                })),
            },
        )),
        hover_provider: Some(HoverProviderCapability::Simple(true)),
        definition_provider: Some(OneOf::Left(true)),
        code_action_provider: Some(CodeActionProviderCapability::Simple(true)),
        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(vec!["@".to_string(), "$".to_string()]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(info) = params.client_info {
            tracing::info!("initialize from {} {}", info.name, info.version.unwrap_or_default());
        }

        Ok(InitializeResult {
            capabilities: capabilities(),
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("initialized");
        self.client
            .log_message(MessageType::INFO, "Blade LSP initialized!")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!(
            "shutdown with {} open documents",
            self.analysis.documents().len()
        );
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        tracing::debug!("didOpen: {}", params.text_document.uri);
        let uri = params.text_document.uri;
        let diagnostics = self.analysis.open(uri.clone(), params.text_document.text);
        self.publish(uri, diagnostics).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        tracing::debug!("didChange: {}", params.text_document.uri);
        // Full sync: the last change carries the whole document.
        if let Some(change) = params.content_changes.into_iter().last() {
            let uri = params.text_document.uri;
            let diagnostics = self.analysis.update(uri.clone(), change.text);
            self.publish(uri, diagnostics).await;
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        tracing::debug!("didSave: {}", params.text_document.uri);
        if let Some(text) = params.text {
            let uri = params.text_document.uri;
            let diagnostics = self.analysis.update(uri.clone(), text);
            self.publish(uri, diagnostics).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        // Documents outlive their editor tabs.
        tracing::debug!("didClose: {}", params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        tracing::debug!("hover: {}:{}:{}", uri, position.line, position.character);

        Ok(Some(self.analysis.hover(&uri, position)))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        tracing::debug!(
            "gotoDefinition: {}:{}:{}",
            uri,
            position.line,
            position.character
        );

        Ok(Some(GotoDefinitionResponse::Scalar(
            self.analysis.definition(&uri, position),
        )))
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;
        tracing::debug!("codeAction: {}", uri);

        Ok(Some(self.analysis.code_actions(&uri)))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        tracing::debug!(
            "completion: {}:{}:{}",
            uri,
            position.line,
            position.character
        );

        let items = self.analysis.completion(&uri, position);
        Ok(Some(CompletionResponse::Array(items)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    config.init_logging()?;
    tracing::info!("starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;

    tracing::info!("stopped");
    Ok(())
}
