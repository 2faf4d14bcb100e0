use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Caller-supplied ids longer than this are replaced, not truncated.
const MAX_CALLER_ID_LEN: usize = 64;

/// Correlation id for one utterance request. Carried through the request
/// extensions so the pipeline's log lines and the response header share
/// the same id.
#[derive(Clone, Debug)]
pub struct RequestId(String);

impl RequestId {
    /// Accepts the caller's id only when it is short printable ASCII;
    /// anything else gets a freshly minted uuid so log lines stay
    /// greppable and header-safe.
    fn from_caller(raw: Option<&str>) -> Self {
        match raw {
            Some(id) if is_usable(id) => Self(id.to_string()),
            _ => Self(Uuid::new_v4().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_usable(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_CALLER_ID_LEN && id.chars().all(|ch| ch.is_ascii_graphic())
}

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_caller(
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    );

    let span = tracing::info_span!(
        "utterance_request",
        request_id = %request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path()
    );
    let _guard = span.enter();

    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}
