use crate::state::{AppState, WidgetTarget};
use crate::types::{HttpMethod, TestOutcome};
use hyper::ext::ReasonPhrase;
use parking_lot::RwLock;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::error::Error as _;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Characters left unescaped by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Everything needed to fire one test call, captured at click time
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub token: String,
    /// Sent verbatim; only present for non-GET methods with non-empty text
    pub body: Option<String>,
}

/// Executes a prepared request in the background and stores the outcome on
/// the target widget when it resolves
pub fn execute_request_background(
    state: Arc<RwLock<AppState>>,
    client: reqwest::Client,
    target: WidgetTarget,
    request: PreparedRequest,
) {
    tokio::spawn(async move {
        info!(method = %request.method, url = %request.url, "executing test request");

        let outcome = execute(&client, request).await;

        let mut s = state.write();
        match s.widget_mut(target) {
            Some(widget) => {
                widget.finish_test(outcome);
                s.ui.response_scroll = 0;
            }
            None => {
                debug!(?target, "catalog reloaded while request was in flight, dropping outcome");
            }
        }
    });
}

/// Sends one request and converts whatever happens into a `TestOutcome`.
///
/// Non-2xx answers are not errors: they come back as `Success` with the real
/// status. Network failures and bodies that are not JSON come back as
/// `Failure` carrying the error message.
pub async fn execute(client: &reqwest::Client, request: PreparedRequest) -> TestOutcome {
    let mut request_builder = client
        .request(request.method.to_reqwest(), &request.url)
        .header(CONTENT_TYPE, "application/json")
        .bearer_auth(&request.token);

    if let Some(body) = request.body {
        request_builder = request_builder.body(body);
    }

    let response = match request_builder.send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "test request failed");
            return TestOutcome::error(error_message(&e));
        }
    };

    let status = response.status();
    let status_text = reason_phrase(&response);

    match response.json::<Value>().await {
        Ok(data) => {
            debug!(status = status.as_u16(), "test request completed");
            TestOutcome::Success {
                status: status.as_u16(),
                status_text,
                data,
            }
        }
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "response body is not JSON");
            TestOutcome::error(error_message(&e))
        }
    }
}

/// The reason phrase the server sent. hyper only records it when it differs
/// from the canonical one for the status code.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or("")
            .to_string(),
    }
}

/// Flattens an error and its sources into one line
fn error_message(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Percent-encodes a single URL component the way `encodeURIComponent` does
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build a full URL from the base URL, a path template and parameter values.
///
/// The base URL and template are concatenated verbatim. Every `{name}` in the
/// template is replaced by the encoded value given for `name`; an empty value
/// simply removes the placeholder. Query values are appended in the given
/// order, skipping empty ones, and the `?` only appears when at least one
/// value remains.
pub fn build_url(
    base_url: &str,
    path_template: &str,
    path_values: &[(String, String)],
    query_values: &[(String, String)],
) -> String {
    let mut url = format!("{base_url}{path_template}");

    for (name, value) in path_values {
        let placeholder = format!("{{{name}}}");
        url = url.replace(&placeholder, &encode_component(value));
    }

    let query_string = query_values
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");

    if !query_string.is_empty() {
        url.push('?');
        url.push_str(&query_string);
    }

    url
}
