use maud::{Markup, html};

use crate::content::PhilosophySection;

use super::Fragment;

pub struct Philosophy;

impl Fragment for Philosophy {
    type Section = PhilosophySection;

    fn frame(&self, inner: Markup) -> Markup {
        html! {
            div.text-center id="philosophy" {
                div.container {
                    div.section-title {
                        h2 { "Teaching Philosophy" }
                        p { "This is our Teaching Philosophy" }
                    }
                    div.row { (inner) }
                }
            }
        }
    }

    fn body(&self, section: &PhilosophySection) -> Markup {
        html! {
            @for entry in section.iter() {
                div."col-md-4" {
                    i class=(entry.icon) {}
                    div.philo-desc {
                        h3 { (entry.name) }
                        p { (entry.text) }
                    }
                }
            }
        }
    }
}
