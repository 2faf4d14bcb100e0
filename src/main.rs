use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use voxlate::application::ports::StagingStore;
use voxlate::application::services::{HallucinationLexicon, TranscriptValidator, UtterancePipeline};
use voxlate::domain::LanguageCode;
use voxlate::infrastructure::observability::{init_tracing, TracingConfig};
use voxlate::infrastructure::storage::LocalStagingStore;
use voxlate::infrastructure::transcription::{TranscriptionEngineFactory, TranscriptionProvider};
use voxlate::infrastructure::translation::{TranslationProvider, TranslatorFactory};
use voxlate::presentation::{create_router, AppState, ProviderSetting, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let lexicon = match &settings.pipeline.pattern_file {
        Some(path) => HallucinationLexicon::from_file(path)?,
        None => HallucinationLexicon::embedded()?,
    };
    tracing::info!(
        version = lexicon.version(),
        patterns = lexicon.len(),
        "Hallucination lexicon loaded"
    );
    let validator = Arc::new(TranscriptValidator::new(lexicon));

    let engine = TranscriptionEngineFactory::create(
        match settings.transcription.provider {
            ProviderSetting::OpenAi => TranscriptionProvider::OpenAi,
            ProviderSetting::Mock => TranscriptionProvider::Mock,
        },
        &settings.transcription.model,
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
    )?;

    let translator = TranslatorFactory::create(
        match settings.translation.provider {
            ProviderSetting::OpenAi => TranslationProvider::OpenAi,
            ProviderSetting::Mock => TranslationProvider::Mock,
        },
        &settings.translation.model,
        settings.translation.api_key.clone(),
        settings.translation.base_url.clone(),
    )?;

    let targets: Vec<LanguageCode> = settings
        .pipeline
        .target_languages
        .iter()
        .filter_map(|code| LanguageCode::supported(code))
        .collect();
    anyhow::ensure!(
        !targets.is_empty(),
        "TARGET_LANGUAGES must name at least one supported language"
    );

    let staging: Arc<dyn StagingStore> = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.pipeline.staging_dir,
    ))?);

    let pipeline = Arc::new(UtterancePipeline::new(
        engine, validator, translator, targets, staging,
    ));

    let router = create_router(AppState { pipeline });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on SIGINT or SIGTERM so in-flight utterances finish and
/// their staged audio is released before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %error, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(error = %error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
