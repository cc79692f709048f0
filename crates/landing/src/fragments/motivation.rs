use maud::{Markup, html};

use crate::content::MotivationSection;

use super::Fragment;

/// The text of the auxiliary page.
pub struct Motivation;

impl Fragment for Motivation {
    type Section = MotivationSection;

    fn frame(&self, inner: Markup) -> Markup {
        html! {
            div id="motivation" {
                div.container {
                    div.row {
                        div."col-xs-12"."col-md-12" {
                            div.para-text { (inner) }
                        }
                    }
                }
            }
        }
    }

    fn body(&self, section: &MotivationSection) -> Markup {
        html! {
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
    fn test_motivation_paragraph() {
        let html = binder(r#"{"Motivation":{"paragraph":"Why we started"}}"#)
            .render(&Motivation)
            .into_string();
        assert!(html.contains("<p>Why we started</p>"));
    }

    #[test]
    fn test_motivation_placeholder() {
        let html = SectionBinder::not_loaded().render(&Motivation).into_string();
        assert!(html.contains(PLACEHOLDER));
        assert!(!html.contains("<p>"));
    }
}
