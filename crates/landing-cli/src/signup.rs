use std::sync::Arc;

use landing::signup::{
    submit_signup, HttpSubmitter, SignupField, SignupForm, SignupOptions, SubmissionOutcome,
};
use tracing::{error, info};

/// Sends a single signup to the form endpoint and reports what came back.
pub async fn send_signup(form: SignupForm, options: SignupOptions) -> bool {
    info!(
        name: "signup",
        "sending signup for {:?} <{}> to {}",
        form.get(SignupField::Name),
        form.get(SignupField::Email),
        options.endpoint
    );

    match submit_signup(&form, &options, Arc::new(HttpSubmitter::default())).await {
        Ok(SubmissionOutcome::Delivered { status }) => {
            info!(name: "signup", "delivered ({})", status);
            true
        }
        Ok(SubmissionOutcome::Failed { reason }) => {
            error!(name: "signup", "not delivered: {}", reason);
            false
        }
        Err(err) => {
            error!(name: "signup", "submission task did not complete: {}", err);
            false
        }
    }
}
