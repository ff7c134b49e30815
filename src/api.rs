use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config;
use crate::forms::models::RegistrationPayload;

pub const REGISTER_PATH: &str = "/api/forms/register";

const UNPROCESSABLE: u16 = 422;

/// Message used when a 422 carries field errors but no top-level message.
pub const VALIDATION_FALLBACK: &str = "Validation failed";

/// Per-field validation messages, kept in the order the server sent them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl From<Map<String, Value>> for FieldErrors {
    fn from(map: Map<String, Value>) -> Self {
        let mut errors = FieldErrors::new();
        for (field, value) in map {
            let messages = match value {
                Value::String(s) => vec![s],
                Value::Array(items) => items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
                _ => Vec::new(),
            };
            for message in messages {
                errors.insert(field.as_str(), message);
            }
        }
        errors
    }
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message.into()),
            None => self.0.push((field, vec![message.into()])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    pub fn first_field(&self) -> Option<&str> {
        self.0.first().map(|(name, _)| name.as_str())
    }

    /// Up to `limit` messages across all fields joined with " • ".
    pub fn summary(&self, limit: usize) -> String {
        self.0
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
            .take(limit)
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A 422 response carrying per-field messages.
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },
    #[error("registration rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("request failed: {0}")]
    Network(String),
    #[error("could not encode registration: {0}")]
    Encode(String),
}

impl SubmitError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Validation { .. } => Some(UNPROCESSABLE),
            SubmitError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Message supplied by the server, if the response body had one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Validation { message, .. } => Some(message),
            SubmitError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseBody {
    message: Option<String>,
    errors: Option<FieldErrors>,
}

/// Maps a finished HTTP exchange onto the submission result. Any body that is
/// not a JSON object of the expected shape is treated as `{}`.
pub fn interpret_response(status: u16, body: &str) -> Result<SubmitOutcome, SubmitError> {
    let parsed: ResponseBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.message.filter(|m| !m.trim().is_empty());

    if (200..300).contains(&status) {
        return Ok(SubmitOutcome { message });
    }

    match parsed.errors.filter(|e| !e.is_empty()) {
        Some(errors) if status == UNPROCESSABLE => Err(SubmitError::Validation {
            message: message.unwrap_or_else(|| VALIDATION_FALLBACK.to_string()),
            errors,
        }),
        _ => Err(SubmitError::Rejected { status, message }),
    }
}

pub trait RegistrationApi {
    /// Sends one registration. Implementations issue exactly one request per call.
    fn submit<'a>(
        &'a self,
        payload: &'a RegistrationPayload,
    ) -> LocalBoxFuture<'a, Result<SubmitOutcome, SubmitError>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRegistrationApi {
    base_url: String,
}

impl HttpRegistrationApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn url(&self) -> String {
        config::endpoint(&self.base_url, REGISTER_PATH)
    }
}

impl RegistrationApi for HttpRegistrationApi {
    fn submit<'a>(
        &'a self,
        payload: &'a RegistrationPayload,
    ) -> LocalBoxFuture<'a, Result<SubmitOutcome, SubmitError>> {
        Box::pin(async move {
            let url = self.url();
            info!("Submitting {:?} registration to {}", payload.kind, url);

            let request = Request::post(&url)
                .header("Accept", "application/json")
                .json(payload)
                .map_err(|e| SubmitError::Encode(e.to_string()))?;

            let response = request.send().await.map_err(|e| {
                warn!("Registration request failed: {}", e);
                SubmitError::Network(e.to_string())
            })?;

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if !response.ok() {
                warn!("Registration rejected with status {}", status);
            }
            interpret_response(status, &body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_and_without_message() {
        assert_eq!(
            interpret_response(201, r#"{"message":"Welcome aboard"}"#),
            Ok(SubmitOutcome { message: Some("Welcome aboard".into()) })
        );
        assert_eq!(interpret_response(200, ""), Ok(SubmitOutcome { message: None }));
        assert_eq!(interpret_response(204, "not json"), Ok(SubmitOutcome { message: None }));
    }

    #[test]
    fn unprocessable_with_errors_is_structured() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "phone": ["The phone field is required."],
                "email": ["Invalid email", "Already registered"]
            }
        }"#;
        let err = interpret_response(422, body).unwrap_err();
        let errors = err.field_errors().expect("structured errors");

        assert_eq!(err.status(), Some(422));
        assert_eq!(err.server_message(), Some("The given data was invalid."));
        assert_eq!(errors.first_field(), Some("phone"));
        assert_eq!(errors.first("email"), Some("Invalid email"));
        assert_eq!(errors.messages("email").len(), 2);
        assert_eq!(errors.summary(2), "The phone field is required. • Invalid email");
    }

    #[test]
    fn unprocessable_without_errors_is_opaque() {
        let err = interpret_response(422, r#"{"message":"Nope","errors":{}}"#).unwrap_err();
        assert_eq!(err, SubmitError::Rejected { status: 422, message: Some("Nope".into()) });
    }

    #[test]
    fn other_failures_tolerate_bad_bodies() {
        assert_eq!(
            interpret_response(500, "<html>oops</html>").unwrap_err(),
            SubmitError::Rejected { status: 500, message: None }
        );
        assert_eq!(
            interpret_response(400, r#"{"errors":{"email":["bad"]}}"#).unwrap_err().field_errors(),
            None
        );
    }

    #[test]
    fn scalar_error_values_are_accepted() {
        let err = interpret_response(422, r#"{"errors":{"email":"Invalid email","about":[1,2]}}"#)
            .unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.first("email"), Some("Invalid email"));
        assert!(errors.messages("about").is_empty());
        assert_eq!(err.server_message(), Some(VALIDATION_FALLBACK));
    }

    #[test]
    fn register_url_joins_base() {
        let api = HttpRegistrationApi::new("https://api.example.com/");
        assert_eq!(api.url(), "https://api.example.com/api/forms/register");
    }

    #[test]
    fn insert_groups_messages_by_field() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Invalid email");
        errors.insert("about", "Too short");
        errors.insert("email", "Taken");
        assert_eq!(errors.first_field(), Some("email"));
        assert_eq!(errors.messages("email"), ["Invalid email", "Taken"]);
        assert_eq!(errors.summary(5), "Invalid email • Taken • Too short");
    }
}
