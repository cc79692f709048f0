use maud::{Markup, html};

use crate::route::Route;

/// Static navigation bar. Does not depend on the content document.
pub fn navigation(site_title: &str) -> Markup {
    html! {
        nav.navbar.navbar-default.navbar-fixed-top id="menu" {
            div.container {
                div.navbar-header {
                    button.navbar-toggle.collapsed type="button" data-toggle="collapse" data-target="#navbar-collapse" {
                        span.sr-only { "Toggle navigation" }
                        span.icon-bar {}
                        span.icon-bar {}
                        span.icon-bar {}
                    }
                    a.navbar-brand.page-scroll href="#page-top" { (site_title) }
                }
                div.collapse.navbar-collapse id="navbar-collapse" {
                    ul.nav.navbar-nav.navbar-right {
                        li { a.page-scroll href="#why-care" { "Why Care" } }
                        li { a.page-scroll href="#about" { "About" } }
                        li { a.page-scroll href="#philosophy" { "Philosophy" } }
                        li { a.page-scroll href="#team" { "Team" } }
                        li { a.page-scroll href="#signup" { "Sign Up" } }
                        li { a href=(Route::About.path()) { "Our Story" } }
                    }
                }
            }
        }
    }
}
