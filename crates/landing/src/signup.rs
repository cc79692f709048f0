//! Signup form state and its submission to the external form endpoint.
//!
//! The endpoint belongs to a third party: the site only knows its URL and the names it expects for the three fields.
//! Submitting is an explicit task with an observable [`SubmissionOutcome`], even though the rendered page ignores it.
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::errors::SubmitError;

pub const DEFAULT_ENDPOINT: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfNuS4F9fMhlgx94TA0dfN0JJDRIpQwgR77E8pRrWV_HL6Csw/formResponse";

/// Input names the form endpoint expects for each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Input names of the live form.
///
/// The live form asks for a last name (`entry.516482001`) and a first name (`entry.935697527`) separately. The
/// single `name` field is posted as the last name, and the first-name question is left unanswered.
impl Default for SignupFields {
    fn default() -> Self {
        Self {
            name: "entry.516482001".to_string(),
            email: "entry.236876845".to_string(),
            message: "entry.517359739".to_string(),
        }
    }
}

impl SignupFields {
    pub fn input_name(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Message => &self.message,
        }
    }

    /// Maps an input name back to the field it carries.
    pub fn field_for(&self, input_name: &str) -> Option<SignupField> {
        SignupField::ALL
            .into_iter()
            .find(|field| self.input_name(*field) == input_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupOptions {
    pub endpoint: String,
    pub fields: SignupFields,
}

impl SignupOptions {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            fields: SignupFields::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Name,
    Email,
    Message,
}

impl SignupField {
    pub const ALL: [SignupField; 3] = [SignupField::Name, SignupField::Email, SignupField::Message];
}

/// Current values of the signup form. Every field starts as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    name: String,
    email: String,
    message: String,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of `field`, the other fields are left untouched.
    pub fn set(&mut self, field: SignupField, value: impl Into<String>) {
        let slot = match field {
            SignupField::Name => &mut self.name,
            SignupField::Email => &mut self.email,
            SignupField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Message => &self.message,
        }
    }

    /// Applies a change event coming from the input named `input_name`.
    ///
    /// Returns `false` if no field uses that input name, in which case nothing changes.
    pub fn handle_change(
        &mut self,
        fields: &SignupFields,
        input_name: &str,
        value: impl Into<String>,
    ) -> bool {
        match fields.field_for(input_name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    /// The `(input name, value)` pairs sent to the endpoint, in field order.
    pub fn form_pairs(&self, fields: &SignupFields) -> Vec<(String, String)> {
        SignupField::ALL
            .into_iter()
            .map(|field| {
                (
                    fields.input_name(field).to_string(),
                    self.get(field).to_string(),
                )
            })
            .collect()
    }
}

/// Sends one form-encoded request to an endpoint.
///
/// Implementations block, [`submit_signup`] runs them off the async runtime.
pub trait FormSubmitter: Send + Sync {
    /// Returns the status code of the endpoint's answer.
    fn submit(&self, endpoint: &str, pairs: &[(String, String)]) -> Result<u16, SubmitError>;
}

pub struct HttpSubmitter {
    agent: ureq::Agent,
}

impl HttpSubmitter {
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for HttpSubmitter {
    fn default() -> Self {
        Self::new(ureq::Agent::new_with_defaults())
    }
}

impl FormSubmitter for HttpSubmitter {
    fn submit(&self, endpoint: &str, pairs: &[(String, String)]) -> Result<u16, SubmitError> {
        let result = self
            .agent
            .post(endpoint)
            .send_form(pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())));

        match result {
            Ok(response) => Ok(response.status().as_u16()),
            Err(ureq::Error::StatusCode(status)) => Err(SubmitError::Status(status)),
            Err(err) => Err(SubmitError::Transport(err.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered { status: u16 },
    Failed { reason: String },
}

impl SubmissionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered { .. })
    }
}

/// Submits the current values of `form` to the configured endpoint.
///
/// Issues exactly one request, whatever the field contents. Must be called from within a tokio runtime.
pub fn submit_signup(
    form: &SignupForm,
    options: &SignupOptions,
    submitter: Arc<dyn FormSubmitter>,
) -> JoinHandle<SubmissionOutcome> {
    let endpoint = options.endpoint.clone();
    let pairs = form.form_pairs(&options.fields);

    debug!(target: "signup", "submitting {} fields to {}", pairs.len(), endpoint);

    tokio::task::spawn_blocking(move || match submitter.submit(&endpoint, &pairs) {
        Ok(status) => {
            info!(target: "signup", "form delivered to {} ({})", endpoint, status);
            SubmissionOutcome::Delivered { status }
        }
        Err(err) => {
            warn!(target: "signup", "form submission to {} failed: {}", endpoint, err);
            SubmissionOutcome::Failed {
                reason: err.to_string(),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSubmitter {
        requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl FormSubmitter for RecordingSubmitter {
        fn submit(&self, endpoint: &str, pairs: &[(String, String)]) -> Result<u16, SubmitError> {
            self.requests
                .lock()
                .unwrap()
                .push((endpoint.to_string(), pairs.to_vec()));
            Ok(200)
        }
    }

    struct FailingSubmitter;

    impl FormSubmitter for FailingSubmitter {
        fn submit(&self, _endpoint: &str, _pairs: &[(String, String)]) -> Result<u16, SubmitError> {
            Err(SubmitError::Transport("connection refused".to_string()))
        }
    }

    fn options() -> SignupOptions {
        SignupOptions {
            endpoint: "https://forms.example.com/submit".to_string(),
            fields: SignupFields {
                name: "entry.1".to_string(),
                email: "entry.2".to_string(),
                message: "entry.3".to_string(),
            },
        }
    }

    #[test]
    fn test_form_defaults_to_empty_strings() {
        let form = SignupForm::new();
        for field in SignupField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_set_leaves_other_fields_untouched() {
        let mut form = SignupForm::new();
        form.set(SignupField::Name, "Ada");
        form.set(SignupField::Email, "ada@example.com");
        form.set(SignupField::Message, "Hello");

        let before = form.clone();
        form.set(SignupField::Email, "ada@lovelace.dev");

        assert_eq!(form.get(SignupField::Email), "ada@lovelace.dev");
        assert_eq!(form.get(SignupField::Name), before.get(SignupField::Name));
        assert_eq!(form.get(SignupField::Message), before.get(SignupField::Message));
    }

    #[test]
    fn test_handle_change_by_input_name() {
        let options = options();
        let mut form = SignupForm::new();

        assert!(form.handle_change(&options.fields, "entry.3", "When does it start?"));
        assert_eq!(form.get(SignupField::Message), "When does it start?");
        assert_eq!(form.get(SignupField::Name), "");

        assert!(!form.handle_change(&options.fields, "entry.42", "ignored"));
        assert_eq!(form, {
            let mut expected = SignupForm::new();
            expected.set(SignupField::Message, "When does it start?");
            expected
        });
    }

    #[test]
    fn test_default_fields_resolve() {
        let fields = SignupFields::default();
        assert_eq!(fields.field_for("entry.236876845"), Some(SignupField::Email));
        assert_eq!(fields.field_for("email"), None);
        assert_eq!(fields.input_name(SignupField::Name), "entry.516482001");
        // First-name entry of the live form is not mapped
        assert_eq!(fields.field_for("entry.935697527"), None);
    }

    #[tokio::test]
    async fn test_submit_issues_exactly_one_request() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let mut form = SignupForm::new();
        form.set(SignupField::Name, "Ada");
        form.set(SignupField::Email, "ada@example.com");
        form.set(SignupField::Message, "Sign me up");

        let outcome = submit_signup(&form, &options(), submitter.clone())
            .await
            .unwrap();

        assert_eq!(outcome, SubmissionOutcome::Delivered { status: 200 });
        let requests = submitter.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "https://forms.example.com/submit");
        assert_eq!(
            requests[0].1,
            vec![
                ("entry.1".to_string(), "Ada".to_string()),
                ("entry.2".to_string(), "ada@example.com".to_string()),
                ("entry.3".to_string(), "Sign me up".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_empty_form() {
        let submitter = Arc::new(RecordingSubmitter::default());

        let outcome = submit_signup(&SignupForm::new(), &options(), submitter.clone())
            .await
            .unwrap();

        assert!(outcome.is_delivered());
        let requests = submitter.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].1.iter().all(|(_, value)| value.is_empty()));
    }

    #[tokio::test]
    async fn test_submit_failure_is_observable() {
        let outcome = submit_signup(&SignupForm::new(), &options(), Arc::new(FailingSubmitter))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                reason: "Failed to reach form endpoint: connection refused".to_string()
            }
        );
    }

    #[test]
    fn test_http_submitter_posts_form_encoded_body() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/formResponse", listener.local_addr().unwrap());

        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];

            // Read headers, then as much body as announced
            loop {
                let read = stream.read(&mut buf).unwrap();
                request.extend_from_slice(&buf[..read]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (key, value) = line.split_once(':')?;
                            key.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length || read == 0 {
                        break;
                    }
                }
                if read == 0 {
                    break;
                }
            }

            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();

            String::from_utf8_lossy(&request).to_string()
        });

        let pairs = vec![
            ("entry.1".to_string(), "Ada".to_string()),
            ("entry.2".to_string(), "ada@example.com".to_string()),
            ("entry.3".to_string(), String::new()),
        ];
        let status = HttpSubmitter::default().submit(&endpoint, &pairs).unwrap();
        let request = server.join().unwrap();

        assert_eq!(status, 200);
        assert!(request.starts_with("POST /formResponse"));
        assert!(
            request
                .to_ascii_lowercase()
                .contains("content-type: application/x-www-form-urlencoded")
        );
        assert!(request.ends_with("entry.1=Ada&entry.2=ada%40example.com&entry.3="));
    }
}
