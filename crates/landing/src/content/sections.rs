use std::ops::Deref;

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A named section of the content document with a known shape.
pub trait Section: DeserializeOwned {
    /// Key of the section in the content document.
    const NAME: &'static str;
}

macro_rules! record_section {
    ($name:literal => $ty:ident) => {
        impl Section for $ty {
            const NAME: &'static str = $name;
        }
    };
}

/// Defines a section whose payload is an ordered list of uniform records.
macro_rules! list_section {
    ($name:literal => $ty:ident($entry:ty)) => {
        #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
        #[serde(transparent)]
        pub struct $ty(pub Vec<$entry>);

        impl Section for $ty {
            const NAME: &'static str = $name;
        }

        impl Deref for $ty {
            type Target = [$entry];

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HeaderSection {
    pub title: String,
    pub paragraph: String,
}
record_section!("Header" => HeaderSection);

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AboutSection {
    pub paragraph: String,
}
record_section!("About" => AboutSection);

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MotivationSection {
    pub paragraph: String,
}
record_section!("Motivation" => MotivationSection);

/// Contact details shown next to the signup form.
///
/// Every field is read on its own: a missing text renders the placeholder, a missing social link still renders as a
/// link to the site root.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactSection {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}
record_section!("SignUp" => ContactSection);

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WhyCareEntry {
    pub icon: String,
    pub title: String,
    pub text: String,
}
list_section!("WhyCare" => WhyCareSection(WhyCareEntry));

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhilosophyEntry {
    pub icon: String,
    pub name: String,
    pub text: String,
}
list_section!("Philosophy" => PhilosophySection(PhilosophyEntry));

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub img: String,
    pub name: String,
    pub job: String,
}
list_section!("Team" => TeamSection(TeamMember));
