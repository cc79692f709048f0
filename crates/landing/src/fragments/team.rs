use maud::{Markup, html};

use crate::content::TeamSection;

use super::Fragment;

pub struct Team;

impl Fragment for Team {
    type Section = TeamSection;

    fn frame(&self, inner: Markup) -> Markup {
        html! {
            div.text-center id="team" {
                div.container {
                    div."col-md-8"."col-md-offset-2".section-title {
                        h2 { "Meet the Team" }
                    }
                    div id="row" { (inner) }
                }
            }
        }
    }

    fn body(&self, section: &TeamSection) -> Markup {
        html! {
            @for member in section.iter() {
                div."col-md-3"."col-sm-6".team {
                    div.thumbnail {
                        img.team-img src=(member.img) alt="";
                        div.caption {
                            h4 { (member.name) }
                            p { (member.job) }
                        }
                    }
                }
            }
        }
    }
}
