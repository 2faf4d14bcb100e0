use std::collections::BTreeMap;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use bytes::Bytes;
use serde::Serialize;

use crate::domain::{PipelineOutcome, Utterance};
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UtteranceResponse {
    NoSpeech,
    Rejected {
        reason: &'static str,
    },
    UnsupportedLanguage {
        detected: String,
    },
    Translated {
        detected_language: String,
        source_text: String,
        translations: BTreeMap<String, String>,
    },
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts one multipart utterance: an `audio` (or `file`) part plus an
/// optional `language` hint part. Always answers with exactly one
/// outcome payload; capability faults map to 502.
#[tracing::instrument(skip_all, fields(request_id = %request_id.as_str()))]
pub async fn utterance_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut audio: Option<Bytes> = None;
    let mut language_hint: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        match field.name() {
            Some("language") => match field.text().await {
                Ok(text) => language_hint = Some(text),
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read language field: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            Some("audio") | Some("file") => match field.bytes().await {
                Ok(bytes) => audio = Some(bytes),
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read audio field: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            _ => continue,
        }
    }

    let audio = match audio {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => {
            tracing::warn!("Utterance request with no audio part");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio uploaded".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        bytes = audio.len(),
        hint = language_hint.as_deref().unwrap_or("-"),
        "Utterance received"
    );

    let utterance = Utterance::new(audio, language_hint);

    match state.pipeline.process(utterance).await {
        Ok(outcome) => (StatusCode::OK, Json(to_response(outcome))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Pipeline capability failure");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Pipeline failure: {}", e),
                }),
            )
                .into_response()
        }
    }
}

fn to_response(outcome: PipelineOutcome) -> UtteranceResponse {
    match outcome {
        PipelineOutcome::NoSpeech => UtteranceResponse::NoSpeech,
        PipelineOutcome::Rejected(reason) => UtteranceResponse::Rejected {
            reason: reason.as_tag(),
        },
        PipelineOutcome::UnsupportedLanguage(detected) => {
            UtteranceResponse::UnsupportedLanguage { detected }
        }
        PipelineOutcome::Translated {
            language,
            text,
            translations,
        } => UtteranceResponse::Translated {
            detected_language: language.as_str().to_string(),
            source_text: text,
            translations: translations
                .iter()
                .map(|(code, text)| (code.as_str().to_string(), text.to_string()))
                .collect(),
        },
    }
}
