//! Endpoint widget
//!
//! One widget per documented endpoint. It owns the form state of the Test
//! view (parameter values and body text), the active view tab, the in-flight
//! flag and the most recent test outcome. All transitions are explicit method
//! calls; nothing changes as a side effect of rendering.

use crate::request::{build_url, PreparedRequest};
use crate::session::SessionConfig;
use crate::types::{EndpointDescriptor, HttpMethod, ParamKind, TestOutcome, ViewTab};
use std::sync::Arc;

pub const CONFIG_MISSING_MESSAGE: &str = "Please configure the base URL and token first";

/// What happened when the user asked to run a test
#[derive(Debug, Clone, PartialEq)]
pub enum TestStart {
    /// Request built; the caller is expected to send it
    Ready(PreparedRequest),
    /// Base URL or token missing; the configuration error is now the outcome
    Rejected,
    /// A call from this widget is still running
    Busy,
}

#[derive(Debug, Clone)]
pub struct EndpointWidget {
    descriptor: Arc<EndpointDescriptor>,
    tab: ViewTab,
    /// Values in the order the user first entered them
    path_values: Vec<(String, String)>,
    query_values: Vec<(String, String)>,
    body: String,
    outcome: Option<TestOutcome>,
    in_flight: bool,
}

impl EndpointWidget {
    pub fn new(descriptor: EndpointDescriptor) -> Self {
        let body = descriptor.request_body.clone().unwrap_or_default();
        Self {
            descriptor: Arc::new(descriptor),
            tab: ViewTab::default(),
            path_values: Vec::new(),
            query_values: Vec::new(),
            body,
            outcome: None,
            in_flight: false,
        }
    }

    pub fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }

    pub fn method(&self) -> HttpMethod {
        self.descriptor.method
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ViewTab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    pub fn set_param_value(&mut self, kind: ParamKind, name: &str, value: impl Into<String>) {
        let values = match kind {
            ParamKind::Path => &mut self.path_values,
            ParamKind::Query => &mut self.query_values,
        };
        let value = value.into();

        if let Some(entry) = values.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            values.push((name.to_string(), value));
        }
    }

    pub fn set_path_value(&mut self, name: &str, value: impl Into<String>) {
        self.set_param_value(ParamKind::Path, name, value);
    }

    pub fn set_query_value(&mut self, name: &str, value: impl Into<String>) {
        self.set_param_value(ParamKind::Query, name, value);
    }

    pub fn param_value(&self, kind: ParamKind, name: &str) -> &str {
        let values = match kind {
            ParamKind::Path => &self.path_values,
            ParamKind::Query => &self.query_values,
        };
        values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn path_value(&self, name: &str) -> &str {
        self.param_value(ParamKind::Path, name)
    }

    /// Path and query parameters in display order: path first, then query
    pub fn editable_params(&self) -> Vec<(ParamKind, &str)> {
        self.descriptor
            .path_params
            .iter()
            .map(|p| (ParamKind::Path, p.name.as_str()))
            .chain(
                self.descriptor
                    .query_params
                    .iter()
                    .map(|p| (ParamKind::Query, p.name.as_str())),
            )
            .collect()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// The body editor is offered for POST/PUT/PATCH only
    pub fn shows_body_editor(&self) -> bool {
        self.descriptor.method.supports_body()
    }

    pub fn outcome(&self) -> Option<&TestOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Required path parameters that currently have no value.
    /// Informational only; URL building never fails because of them.
    pub fn missing_required_path_params(&self) -> Vec<&str> {
        self.descriptor
            .path_params
            .iter()
            .filter(|p| p.required && self.path_value(&p.name).is_empty())
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Builds the request URL against the given session.
    ///
    /// Every declared path parameter is substituted, unsupplied ones with the
    /// empty string. Query parameters keep the order they were entered in.
    pub fn build_url(&self, session: &SessionConfig) -> String {
        let path_values: Vec<(String, String)> = self
            .descriptor
            .path_params
            .iter()
            .map(|p| (p.name.clone(), self.path_value(&p.name).to_string()))
            .collect();

        build_url(
            &session.base_url,
            &self.descriptor.path,
            &path_values,
            &self.query_values,
        )
    }

    /// Starts a test call. The request is computed here, synchronously, so
    /// later configuration edits do not affect a call already started.
    pub fn begin_test(&mut self, session: &SessionConfig) -> TestStart {
        if !session.is_ready() {
            self.outcome = Some(TestOutcome::error(CONFIG_MISSING_MESSAGE));
            return TestStart::Rejected;
        }

        if self.in_flight {
            return TestStart::Busy;
        }

        let method = self.descriptor.method;
        let body = if method != HttpMethod::Get && !self.body.is_empty() {
            Some(self.body.clone())
        } else {
            None
        };

        let request = PreparedRequest {
            method,
            url: self.build_url(session),
            token: session.token.clone(),
            body,
        };

        self.in_flight = true;
        TestStart::Ready(request)
    }

    /// Stores the outcome of a finished call, replacing any previous one
    pub fn finish_test(&mut self, outcome: TestOutcome) {
        self.outcome = Some(outcome);
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamDescriptor;
    use serde_json::Value;

    fn param(name: &str, required: bool) -> ParamDescriptor {
        ParamDescriptor {
            name: name.to_string(),
            required,
            description: String::new(),
        }
    }

    fn descriptor(method: HttpMethod, path: &str) -> EndpointDescriptor {
        EndpointDescriptor {
            method,
            path: path.to_string(),
            title: "Get user".to_string(),
            description: String::new(),
            section: None,
            path_params: vec![],
            query_params: vec![],
            request_body: None,
            response_example: Value::Null,
        }
    }

    fn users_widget() -> EndpointWidget {
        let mut d = descriptor(HttpMethod::Get, "/users/{id}");
        d.path_params = vec![param("id", true)];
        d.query_params = vec![param("verbose", false), param("note", false)];
        EndpointWidget::new(d)
    }

    fn ready_session() -> SessionConfig {
        SessionConfig::new("https://api.sidis.com", "token-123")
    }

    #[test]
    fn test_new_widget_defaults() {
        let widget = users_widget();
        assert_eq!(widget.tab(), ViewTab::Description);
        assert!(widget.outcome().is_none());
        assert!(!widget.is_in_flight());
        assert_eq!(widget.body(), "");
    }

    #[test]
    fn test_body_starts_from_example() {
        let mut d = descriptor(HttpMethod::Post, "/users");
        d.request_body = Some("{\"name\": \"Ana\"}".to_string());
        let widget = EndpointWidget::new(d);
        assert_eq!(widget.body(), "{\"name\": \"Ana\"}");
        assert!(widget.shows_body_editor());
    }

    #[test]
    fn test_build_url_example() {
        let mut widget = users_widget();
        widget.set_path_value("id", "42");
        widget.set_query_value("verbose", "true");
        widget.set_query_value("note", "");

        assert_eq!(
            widget.build_url(&ready_session()),
            "https://api.sidis.com/users/42?verbose=true"
        );
    }

    #[test]
    fn test_build_url_unsupplied_path_param_is_emptied() {
        let widget = users_widget();
        assert_eq!(
            widget.build_url(&ready_session()),
            "https://api.sidis.com/users/"
        );
    }

    #[test]
    fn test_query_order_is_population_order() {
        let mut widget = users_widget();
        widget.set_query_value("note", "n");
        widget.set_query_value("verbose", "v");
        // updating keeps the original position
        widget.set_query_value("note", "m");

        assert_eq!(
            widget.build_url(&ready_session()),
            "https://api.sidis.com/users/?note=m&verbose=v"
        );
    }

    #[test]
    fn test_missing_required_path_params() {
        let mut widget = users_widget();
        assert_eq!(widget.missing_required_path_params(), vec!["id"]);

        widget.set_path_value("id", "7");
        assert!(widget.missing_required_path_params().is_empty());
    }

    #[test]
    fn test_begin_test_without_config_is_rejected() {
        let mut widget = users_widget();

        let start = widget.begin_test(&SessionConfig::new("https://api.sidis.com", ""));
        assert_eq!(start, TestStart::Rejected);
        assert!(!widget.is_in_flight());
        assert_eq!(
            widget.outcome(),
            Some(&TestOutcome::error(CONFIG_MISSING_MESSAGE))
        );

        let start = widget.begin_test(&SessionConfig::new("", "token"));
        assert_eq!(start, TestStart::Rejected);
    }

    #[test]
    fn test_begin_test_builds_request_snapshot() {
        let mut widget = users_widget();
        widget.set_path_value("id", "42");

        let mut session = ready_session();
        let start = widget.begin_test(&session);

        // editing the session afterwards does not change the prepared request
        session.update(crate::session::SessionField::Token, "other");

        assert_eq!(
            start,
            TestStart::Ready(PreparedRequest {
                method: HttpMethod::Get,
                url: "https://api.sidis.com/users/42".to_string(),
                token: "token-123".to_string(),
                body: None,
            })
        );
        assert!(widget.is_in_flight());
    }

    #[test]
    fn test_begin_test_busy_while_in_flight() {
        let mut widget = users_widget();
        assert!(matches!(widget.begin_test(&ready_session()), TestStart::Ready(_)));
        assert_eq!(widget.begin_test(&ready_session()), TestStart::Busy);

        widget.finish_test(TestOutcome::error("boom"));
        assert!(!widget.is_in_flight());
        assert!(matches!(widget.begin_test(&ready_session()), TestStart::Ready(_)));
    }

    #[test]
    fn test_get_never_sends_body() {
        let mut widget = users_widget();
        widget.set_body("{\"ignored\": true}");

        match widget.begin_test(&ready_session()) {
            TestStart::Ready(request) => assert_eq!(request.body, None),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_delete_sends_body_when_present() {
        let mut widget = EndpointWidget::new(descriptor(HttpMethod::Delete, "/users"));
        widget.set_body("[1,2]");

        match widget.begin_test(&ready_session()) {
            TestStart::Ready(request) => assert_eq!(request.body.as_deref(), Some("[1,2]")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_is_not_sent() {
        let mut widget = EndpointWidget::new(descriptor(HttpMethod::Post, "/users"));

        match widget.begin_test(&ready_session()) {
            TestStart::Ready(request) => assert_eq!(request.body, None),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_finish_test_replaces_outcome() {
        let mut widget = users_widget();
        widget.finish_test(TestOutcome::error("first"));
        widget.finish_test(TestOutcome::Success {
            status: 200,
            status_text: "OK".to_string(),
            data: serde_json::json!({"ok": true}),
        });

        assert!(matches!(
            widget.outcome(),
            Some(TestOutcome::Success { status: 200, .. })
        ));
    }

    #[test]
    fn test_tab_navigation() {
        let mut widget = users_widget();
        widget.next_tab();
        assert_eq!(widget.tab(), ViewTab::Test);
        widget.select_tab(ViewTab::Example);
        assert_eq!(widget.tab(), ViewTab::Example);
        widget.prev_tab();
        assert_eq!(widget.tab(), ViewTab::Test);
    }

    #[test]
    fn test_editable_params_order() {
        let widget = users_widget();
        assert_eq!(
            widget.editable_params(),
            vec![
                (ParamKind::Path, "id"),
                (ParamKind::Query, "verbose"),
                (ParamKind::Query, "note"),
            ]
        );
    }
}
