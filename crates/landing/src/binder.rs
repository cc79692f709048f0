//! Distributes the sections of the content document to the fragments rendering them.
use maud::Markup;

use crate::content::{ContentDocument, Loadable, Section};
use crate::fragments::Fragment;

/// Owns the content document for the duration of a build and hands each fragment its section.
///
/// This is the only place deciding between a fragment's body and its placeholder: fragments themselves only ever see
/// a loaded, well-shaped section.
#[derive(Debug, Clone)]
pub struct SectionBinder {
    content: Loadable<ContentDocument>,
}

impl SectionBinder {
    pub fn new(content: Loadable<ContentDocument>) -> Self {
        Self { content }
    }

    /// A binder over a document that never loaded. Every fragment renders its placeholder.
    pub fn not_loaded() -> Self {
        Self::new(Loadable::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.content.is_loaded()
    }

    pub fn content(&self) -> Loadable<&ContentDocument> {
        self.content.as_ref()
    }

    pub fn section<S: Section>(&self) -> Loadable<S> {
        match &self.content {
            Loadable::NotLoaded => Loadable::NotLoaded,
            Loadable::Loaded(document) => document.section::<S>().into(),
        }
    }

    pub fn render<F: Fragment>(&self, fragment: &F) -> Markup {
        let inner = match self.section::<F::Section>() {
            Loadable::Loaded(section) => fragment.body(&section),
            Loadable::NotLoaded => fragment.placeholder(),
        };

        fragment.frame(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AboutSection, TeamSection};
    use crate::fragments::{About, PLACEHOLDER};

    fn binder(json: &str) -> SectionBinder {
        SectionBinder::new(Loadable::Loaded(ContentDocument::from_json(json).unwrap()))
    }

    #[test]
    fn test_section_not_loaded() {
        let binder = SectionBinder::not_loaded();
        assert!(!binder.is_loaded());
        assert_eq!(binder.section::<AboutSection>(), Loadable::NotLoaded);
    }

    #[test]
    fn test_section_missing_from_loaded_document() {
        let binder = binder(r#"{"About":{"paragraph":"Hi"}}"#);
        assert!(binder.is_loaded());
        assert_eq!(binder.section::<TeamSection>(), Loadable::NotLoaded);
        assert_eq!(
            binder.section::<AboutSection>(),
            Loadable::Loaded(AboutSection {
                paragraph: "Hi".to_string()
            })
        );
    }

    #[test]
    fn test_render_switches_between_body_and_placeholder() {
        let loaded = binder(r#"{"About":{"paragraph":"Coaching for curious minds"}}"#)
            .render(&About)
            .into_string();
        assert!(loaded.contains("Coaching for curious minds"));
        assert!(!loaded.contains(PLACEHOLDER));

        let pending = SectionBinder::not_loaded().render(&About).into_string();
        assert!(pending.contains(PLACEHOLDER));
        // The frame is kept so navigation anchors still resolve
        assert!(pending.contains("id=\"about\""));
    }
}
