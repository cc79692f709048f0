//! Pages of the site and the layout they share.
//!
//! Every page implements [`Page`]; [`pages()`] lists everything the build writes out.
use maud::{DOCTYPE, Markup, html};

use crate::GENERATOR;
use crate::binder::SectionBinder;
use crate::build::options::BuildOptions;
use crate::fragments::{About, Header, Motivation, Philosophy, SignUp, Team, WhyCare, navigation};
use crate::route::Route;

/// What a page gets to render itself.
pub struct PageContext<'a> {
    pub binder: &'a SectionBinder,
    pub options: &'a BuildOptions,
    /// The current path being rendered, e.g. `/abt/`.
    pub current_path: &'a str,
}

impl PageContext<'_> {
    /// Returns the canonical URL for the current page. If [`BuildOptions::base_url`] is not set, this will return `None`.
    pub fn canonical_url(&self) -> Option<String> {
        self.options
            .base_url
            .as_ref()
            .map(|base| format!("{}{}", base.trim_end_matches('/'), self.current_path))
    }
}

pub trait Page: Sync {
    /// Raw route of the page, e.g. `/` or `404.html`.
    fn route_raw(&self) -> &'static str;

    fn render(&self, ctx: &PageContext) -> Markup;
}

/// Every page of the site, in build order.
pub fn pages() -> [&'static dyn Page; 3] {
    [&LandingPage, &AuxiliaryPage, &NotFoundPage]
}

pub fn page_for(route: Route) -> &'static dyn Page {
    match route {
        Route::Landing => &LandingPage,
        Route::About => &AuxiliaryPage,
    }
}

#[derive(Default)]
pub struct SeoMeta {
    /// Page-specific title, the site title is appended to it.
    pub title: Option<String>,
    pub description: Option<String>,
    /// Sends the browser to this URL as soon as the page loads.
    pub redirect_to: Option<String>,
}

impl SeoMeta {
    pub fn render(&self, ctx: &PageContext) -> Markup {
        let site_title = &ctx.options.site_title;
        let formatted_title = match &self.title {
            Some(title) => format!("{} - {}", title, site_title),
            None => site_title.clone(),
        };
        let canonical_url = ctx.canonical_url();

        html! {
            title { (formatted_title) }
            @if let Some(description) = &self.description {
                meta name="description" content=(description);
                meta property="og:description" content=(description);
            }
            meta property="og:title" content=(formatted_title);
            meta property="og:type" content="website";
            @if let Some(canonical_url) = &canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }
            @if let Some(target) = &self.redirect_to {
                meta http-equiv="refresh" content=(format!("0; url={}", target));
            }
        }
    }
}

pub fn layout(main: Markup, ctx: &PageContext, seo: SeoMeta) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(GENERATOR);
                (seo.render(ctx))
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";
                link rel="stylesheet" type="text/css" href="/css/style.css";
            }
            body id="page-top" {
                (main)
                div id="footer" {
                    div.container.text-center {
                        p { "© " (ctx.options.site_title) }
                    }
                }
            }
        }
    }
}

/// `/`: navigation followed by every section, in a fixed order.
pub struct LandingPage;

impl Page for LandingPage {
    fn route_raw(&self) -> &'static str {
        Route::Landing.path()
    }

    fn render(&self, ctx: &PageContext) -> Markup {
        let binder = ctx.binder;

        layout(
            html! {
                (navigation(&ctx.options.site_title))
                (binder.render(&Header))
                (binder.render(&WhyCare))
                (binder.render(&About))
                (binder.render(&Philosophy))
                (binder.render(&Team))
                (binder.render(&SignUp::new(&ctx.options.signup)))
            },
            ctx,
            SeoMeta::default(),
        )
    }
}

/// `/abt/`: the motivation text on its own.
pub struct AuxiliaryPage;

impl Page for AuxiliaryPage {
    fn route_raw(&self) -> &'static str {
        Route::About.path()
    }

    fn render(&self, ctx: &PageContext) -> Markup {
        layout(
            html! {
                (ctx.binder.render(&Motivation))
                div.container.text-center {
                    a.btn.btn-custom.btn-lg href=(Route::Landing.path()) { "Back to the course" }
                }
            },
            ctx,
            SeoMeta {
                title: Some("Our Story".to_string()),
                ..Default::default()
            },
        )
    }
}

/// Served by static hosts for unknown paths. Sends visitors back to the landing page.
pub struct NotFoundPage;

impl Page for NotFoundPage {
    fn route_raw(&self) -> &'static str {
        "404.html"
    }

    fn render(&self, ctx: &PageContext) -> Markup {
        let target = Route::FALLBACK.path();

        layout(
            html! {
                div.container.text-center {
                    h1 { "Page not found" }
                    p { "Taking you back to the " a href=(target) { "home page" } "." }
                }
            },
            ctx,
            SeoMeta {
                title: Some("Page not found".to_string()),
                redirect_to: Some(target.to_string()),
                ..Default::default()
            },
        )
    }
}
