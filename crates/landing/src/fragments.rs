//! Display fragments, one per section of the landing page.
//!
//! A fragment is a pure projection of one section of the content document to markup. It never decides what happens
//! when its section is missing, the [`SectionBinder`](crate::binder::SectionBinder) does.
use maud::{Markup, html};

use crate::content::Section;

mod about;
mod header;
mod motivation;
mod navigation;
mod philosophy;
mod signup;
mod team;
mod why_care;

pub use about::About;
pub use header::Header;
pub use motivation::Motivation;
pub use navigation::navigation;
pub use philosophy::Philosophy;
pub use signup::SignUp;
pub use team::Team;
pub use why_care::WhyCare;

/// Text shown in place of a section that is not available.
pub const PLACEHOLDER: &str = "loading...";

pub trait Fragment {
    type Section: Section;

    /// Fixed chrome around the section, rendered whether or not the section is loaded.
    fn frame(&self, inner: Markup) -> Markup;

    fn body(&self, section: &Self::Section) -> Markup;

    fn placeholder(&self) -> Markup {
        placeholder()
    }
}

pub fn placeholder() -> Markup {
    html! { (PLACEHOLDER) }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::binder::SectionBinder;
    use crate::content::{ContentDocument, Loadable};

    pub fn binder(json: &str) -> SectionBinder {
        SectionBinder::new(Loadable::Loaded(
            ContentDocument::from_json(json).expect("test document should parse"),
        ))
    }

    /// Counts the non-overlapping occurrences of `needle` in `haystack`.
    pub fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }
}
