use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// HTTP methods an endpoint descriptor may declare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    #[serde(alias = "get")]
    Get,
    #[serde(alias = "post")]
    Post,
    #[serde(alias = "put")]
    Put,
    #[serde(alias = "delete")]
    Delete,
    #[serde(alias = "patch")]
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Methods that get a body editor in the Test view (POST/PUT/PATCH)
    pub fn supports_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented path or query parameter
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub description: String,
}

/// Static, author-supplied metadata describing one documented REST operation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EndpointDescriptor {
    #[serde(default)]
    pub method: HttpMethod,

    /// Path template, e.g. `/users/{id}`
    #[serde(alias = "endpoint")]
    pub path: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Documentation section the endpoint is listed under
    #[serde(default)]
    pub section: Option<String>,

    #[serde(default, alias = "pathParams")]
    pub path_params: Vec<ParamDescriptor>,

    #[serde(default, alias = "queryParams")]
    pub query_params: Vec<ParamDescriptor>,

    /// Example request body, kept as raw text for the body editor
    #[serde(default, alias = "requestBody", deserialize_with = "deserialize_body")]
    pub request_body: Option<String>,

    /// Example response payload (any JSON value, or a string holding JSON)
    #[serde(default, alias = "responseExample")]
    pub response_example: Value,
}

impl EndpointDescriptor {
    /// Title used in lists; falls back to the path when the author left it out
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.path
        } else {
            &self.title
        }
    }
}

/// Accepts either a raw string or a structured value for the example body.
/// Structured values are stored pretty-printed so they can be edited as text.
fn deserialize_body<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(crate::format::format_json(&other)),
    })
}

/// Result of the most recent test call made from an endpoint widget
#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    /// The server answered; any status code, 2xx or not, lands here
    Success {
        status: u16,
        status_text: String,
        data: Value,
    },

    /// Configuration missing, network failure, or unparseable body
    Failure { error: String },
}

impl TestOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        TestOutcome::Failure {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TestOutcome::Failure { .. })
    }
}

/// The three views of an endpoint widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewTab {
    #[default]
    Description,
    Test,
    Example,
}

impl ViewTab {
    pub const ALL: [ViewTab; 3] = [ViewTab::Description, ViewTab::Test, ViewTab::Example];

    pub fn title(&self) -> &'static str {
        match self {
            ViewTab::Description => "Description",
            ViewTab::Test => "Test",
            ViewTab::Example => "Example",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ViewTab::Description => ViewTab::Test,
            ViewTab::Test => ViewTab::Example,
            ViewTab::Example => ViewTab::Description,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ViewTab::Description => ViewTab::Example,
            ViewTab::Test => ViewTab::Description,
            ViewTab::Example => ViewTab::Test,
        }
    }
}

/// Distinguishes between path and query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Path,
    Query,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    Flat,
    Grouped,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Idle,
    Loading,
    Complete,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    SectionHeader {
        name: String,
        count: usize,
        expanded: bool,
    },
    /// Index into the loaded widgets
    Endpoint { index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditingConfig,
    Searching,
    EditingBody,
}

/// Tracks which main panel has focus
#[derive(Debug, Clone, PartialEq)]
pub enum PanelFocus {
    EndpointsList, // Left panel
    Details,       // Right panel
}

// For tracking parameter editing in the Test view
#[derive(Debug, Clone, PartialEq)]
pub enum ParamEditMode {
    Viewing,
    Editing { kind: ParamKind, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_defaults_to_get() {
        let endpoint: EndpointDescriptor = serde_json::from_str(r#"{"path": "/users"}"#).unwrap();
        assert_eq!(endpoint.method, HttpMethod::Get);
        assert!(endpoint.path_params.is_empty());
        assert_eq!(endpoint.response_example, Value::Null);
        assert_eq!(endpoint.request_body, None);
    }

    #[test]
    fn test_accepts_camel_case_aliases() {
        let endpoint: EndpointDescriptor = serde_json::from_str(
            r#"{
                "method": "POST",
                "endpoint": "/users/{id}/notes",
                "pathParams": [{"name": "id", "required": true, "description": "User id"}],
                "queryParams": [{"name": "draft"}],
                "requestBody": "{\"text\": \"hi\"}",
                "responseExample": {"ok": true}
            }"#,
        )
        .unwrap();

        assert_eq!(endpoint.method, HttpMethod::Post);
        assert_eq!(endpoint.path, "/users/{id}/notes");
        assert!(endpoint.path_params[0].required);
        assert!(!endpoint.query_params[0].required);
        assert_eq!(endpoint.query_params[0].description, "");
        assert_eq!(endpoint.request_body.as_deref(), Some("{\"text\": \"hi\"}"));
        assert_eq!(endpoint.response_example, serde_json::json!({"ok": true}));
    }

    #[test]
    fn test_structured_request_body_is_pretty_printed() {
        let endpoint: EndpointDescriptor =
            serde_json::from_str(r#"{"path": "/x", "request_body": {"a": 1}}"#).unwrap();
        assert_eq!(endpoint.request_body.as_deref(), Some("{\n  \"a\": 1\n}"));
    }

    #[test]
    fn test_lowercase_method_accepted() {
        let endpoint: EndpointDescriptor =
            serde_json::from_str(r#"{"path": "/x", "method": "delete"}"#).unwrap();
        assert_eq!(endpoint.method, HttpMethod::Delete);
    }

    #[test]
    fn test_supports_body() {
        assert!(!HttpMethod::Get.supports_body());
        assert!(!HttpMethod::Delete.supports_body());
        assert!(HttpMethod::Post.supports_body());
        assert!(HttpMethod::Put.supports_body());
        assert!(HttpMethod::Patch.supports_body());
    }

    #[test]
    fn test_view_tab_cycles() {
        assert_eq!(ViewTab::default(), ViewTab::Description);
        assert_eq!(ViewTab::Description.next(), ViewTab::Test);
        assert_eq!(ViewTab::Example.next(), ViewTab::Description);
        assert_eq!(ViewTab::Description.prev(), ViewTab::Example);
        assert_eq!(ViewTab::Test.prev(), ViewTab::Description);
    }

    #[test]
    fn test_display_title_falls_back_to_path() {
        let mut endpoint: EndpointDescriptor =
            serde_json::from_str(r#"{"path": "/health"}"#).unwrap();
        assert_eq!(endpoint.display_title(), "/health");

        endpoint.title = "Health check".to_string();
        assert_eq!(endpoint.display_title(), "Health check");
    }
}
