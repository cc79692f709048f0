use maud::{Markup, html};

use crate::content::WhyCareSection;

use super::Fragment;

pub struct WhyCare;

impl Fragment for WhyCare {
    type Section = WhyCareSection;

    fn frame(&self, inner: Markup) -> Markup {
        html! {
            div.text-center id="why-care" {
                div.container {
                    div."col-md-10"."col-md-offset-1".section-title {
                        h2 { "Why Care?" }
                    }
                    div.row { (inner) }
                }
            }
        }
    }

    fn body(&self, section: &WhyCareSection) -> Markup {
        html! {
            @for entry in section.iter() {
                div."col-xs-6"."col-md-3".why-care-item {
                    i class=(entry.icon) {}
                    h3 { (entry.title) }
                    p { (entry.text) }
                }
            }
        }
    }
}
