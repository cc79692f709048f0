use maud::{Markup, html};

use crate::content::HeaderSection;

use super::Fragment;

pub struct Header;

impl Fragment for Header {
    type Section = HeaderSection;

    fn frame(&self, inner: Markup) -> Markup {
        html! {
            header id="header" {
                div.intro {
                    div.overlay {
                        div.container {
                            div.row {
                                div."col-md-8"."col-md-offset-2".intro-text {
                                    (inner)
                                    a.btn.btn-custom.btn-lg.page-scroll href="#signup" { "Sign Up" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn body(&self, section: &HeaderSection) -> Markup {
        html! {
            h1 { (section.title) span {} }
            p { (section.paragraph) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::SectionBinder;
    use crate::fragments::PLACEHOLDER;
    use crate::fragments::test_utils::binder;

    #[test]
    fn test_header_renders_title_and_paragraph() {
        let html = binder(r#"{"Header":{"title":"Think Clearly","paragraph":"A course in reasoning"}}"#)
            .render(&Header)
            .into_string();

        assert!(html.contains("<h1>Think Clearly<span></span></h1>"));
        assert!(html.contains("<p>A course in reasoning</p>"));
        assert!(html.contains("href=\"#signup\""));
    }

    #[test]
    fn test_header_placeholder() {
        let html = SectionBinder::not_loaded().render(&Header).into_string();

        assert!(html.contains(PLACEHOLDER));
        assert!(!html.contains("<h1>"));
    }
}
