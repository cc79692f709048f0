use maud::{Markup, html};

use crate::content::AboutSection;

use super::Fragment;

pub struct About;

impl Fragment for About {
    type Section = AboutSection;

    fn frame(&self, inner: Markup) -> Markup {
        html! {
            div id="about" {
                div.container {
                    div.row {
                        div."col-xs-12"."col-md-12" {
                            div.about-text {
                                h2 { "About Us" }
                                (inner)
                            }
                        }
                    }
                }
            }
        }
    }

    fn body(&self, section: &AboutSection) -> Markup {
        html! {
            p { (section.paragraph) }
        }
    }
}
