use maud::{Markup, html};

use crate::content::ContactSection;
use crate::signup::SignupOptions;

use super::{Fragment, PLACEHOLDER};

/// Name of the hidden iframe the form posts into, so the page itself never navigates away.
pub const SUBMIT_TARGET: &str = "hidden_iframe";

/// The signup form and the contact details next to it.
///
/// The form is always rendered, only the contact details depend on the `SignUp` section.
pub struct SignUp<'a> {
    options: &'a SignupOptions,
}

impl<'a> SignUp<'a> {
    pub fn new(options: &'a SignupOptions) -> Self {
        Self { options }
    }

    fn form(&self) -> Markup {
        let fields = &self.options.fields;

        html! {
            form name="gform" id="gform" method="post" action=(self.options.endpoint) target=(SUBMIT_TARGET) {
                div.row {
                    div."col-md-6" {
                        div.form-group {
                            input.form-control type="text" name=(fields.name) id=(fields.name) placeholder="Name" required;
                            p.help-block.text-danger {}
                        }
                    }
                    div."col-md-6" {
                        div.form-group {
                            input.form-control type="email" name=(fields.email) id=(fields.email) placeholder="Email" required;
                            p.help-block.text-danger {}
                        }
                    }
                }
                div.form-group {
                    textarea.form-control name=(fields.message) id=(fields.message) rows="4" placeholder="Any message or questions?" required {}
                    p.help-block.text-danger {}
                }
                // Reserved for a submission status, nothing writes to it yet
                div id="success" {}
                input.btn.btn-custom.btn-lg type="submit" value="Submit";
            }
        }
    }

    fn contact_info(&self, contact: Option<&ContactSection>) -> Markup {
        let address = contact.and_then(|c| c.address.as_deref()).unwrap_or(PLACEHOLDER);
        let phone = contact.and_then(|c| c.phone.as_deref()).unwrap_or(PLACEHOLDER);
        let email = contact.and_then(|c| c.email.as_deref()).unwrap_or(PLACEHOLDER);

        let facebook = contact.and_then(|c| c.facebook.as_deref()).unwrap_or("/");
        let twitter = contact.and_then(|c| c.twitter.as_deref()).unwrap_or("/");
        let youtube = contact.and_then(|c| c.youtube.as_deref()).unwrap_or("/");

        html! {
            div."col-md-3"."col-md-offset-1".contact-info {
                div.contact-item {
                    h3 { "Contact Info" }
                    p {
                        span { i.fa.fa-map-marker {} " Address" }
                        (address)
                    }
                }
                div.contact-item {
                    p {
                        span { i.fa.fa-phone {} " Phone" }
                        " " (phone)
                    }
                }
                div.contact-item {
                    p {
                        span { i.fa."fa-envelope-o" {} " Email" }
                        " " (email)
                    }
                }
            }
            div."col-md-12" {
                div.row {
                    div.social {
                        ul {
                            li { a href=(facebook) { i.fa.fa-facebook {} } }
                            li { a href=(twitter) { i.fa.fa-twitter {} } }
                            li { a href=(youtube) { i.fa.fa-youtube {} } }
                        }
                    }
                }
            }
        }
    }
}

impl Fragment for SignUp<'_> {
    type Section = ContactSection;

    fn frame(&self, inner: Markup) -> Markup {
        html! {
            div {
                div id="signup" {
                    div.container {
                        div."col-md-8" {
                            div.row {
                                div.section-title {
                                    h2 { "Sign Up Now!" }
                                    p { "We will contact you once the course is ready." }
                                }
                                (self.form())
                            }
                        }
                        (inner)
                    }
                }
                iframe name=(SUBMIT_TARGET) id=(SUBMIT_TARGET) style="display:none;" {}
            }
        }
    }

    fn body(&self, section: &ContactSection) -> Markup {
        self.contact_info(Some(section))
    }

    fn placeholder(&self) -> Markup {
        self.contact_info(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::SectionBinder;
    use crate::fragments::test_utils::{binder, count};
    use crate::signup::SignupFields;

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
    fn test_form_targets_endpoint_and_fields() {
        let options = options();
        let html = SectionBinder::not_loaded()
            .render(&SignUp::new(&options))
            .into_string();

        assert!(html.contains("action=\"https://forms.example.com/submit\""));
        assert!(html.contains("method=\"post\""));
        assert!(html.contains("target=\"hidden_iframe\""));
        assert!(html.contains("name=\"entry.1\""));
        assert!(html.contains("name=\"entry.2\""));
        assert!(html.contains("name=\"entry.3\""));
        assert!(html.contains("id=\"success\""));
        assert!(html.contains("<iframe name=\"hidden_iframe\""));
    }

    #[test]
    fn test_contact_info_loaded() {
        let options = options();
        let html = binder(
            r#"{"SignUp":{
                "address":"12 Harbour Road",
                "phone":"+1 555 0100",
                "email":"hello@example.com",
                "facebook":"https://facebook.com/coaching",
                "youtube":"https://youtube.com/@coaching"
            }}"#,
        )
        .render(&SignUp::new(&options))
        .into_string();

        assert!(html.contains("12 Harbour Road"));
        assert!(html.contains("+1 555 0100"));
        assert!(html.contains("hello@example.com"));
        assert!(html.contains("href=\"https://facebook.com/coaching\""));
        assert!(html.contains("href=\"https://youtube.com/@coaching\""));
        // No twitter link in the document, still rendered
        assert_eq!(count(&html, "href=\"/\""), 1);
        assert!(!html.contains(PLACEHOLDER));
    }

    #[test]
    fn test_partial_contact_info_keeps_present_fields() {
        let options = options();
        let html = binder(r#"{"SignUp":{"facebook":"https://fb.example/x","address":"12 Road"}}"#)
            .render(&SignUp::new(&options))
            .into_string();

        assert!(html.contains("12 Road"));
        assert!(html.contains("href=\"https://fb.example/x\""));
        // Phone and email are missing
        assert_eq!(count(&html, PLACEHOLDER), 2);
        assert_eq!(count(&html, "href=\"/\""), 2);
    }

    #[test]
    fn test_contact_info_placeholder() {
        let options = options();
        let html = SectionBinder::not_loaded()
            .render(&SignUp::new(&options))
            .into_string();

        assert_eq!(count(&html, PLACEHOLDER), 3);
        assert_eq!(count(&html, "href=\"/\""), 3);
        // Form is still usable
        assert!(html.contains("id=\"gform\""));
    }
}
