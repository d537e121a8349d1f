//! Registry of the languages that can appear as code tabs.
//!
//! The set is closed: every supported language is a [`Language`] variant and
//! its descriptor is produced by an exhaustive match, so adding a language is
//! a compile-checked change rather than a runtime registration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language that gets its own tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Kotlin,
}

/// Marker tag, canonical id and display label of a supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageDescriptor {
    /// Class-like marker found on rendered code (`language-java`)
    pub tag: &'static str,
    /// Stable identifier used as the tab value (`java`)
    pub id: &'static str,
    /// Human readable tab label (`Java`)
    pub label: &'static str,
    #[serde(skip)]
    pub language: Language,
}

static JAVA: LanguageDescriptor = LanguageDescriptor {
    tag: "language-java",
    id: "java",
    label: "Java",
    language: Language::Java,
};

static KOTLIN: LanguageDescriptor = LanguageDescriptor {
    tag: "language-kotlin",
    id: "kotlin",
    label: "Kotlin",
    language: Language::Kotlin,
};

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 2] = [Language::Java, Language::Kotlin];

    pub fn descriptor(self) -> &'static LanguageDescriptor {
        match self {
            Language::Java => &JAVA,
            Language::Kotlin => &KOTLIN,
        }
    }

    /// Resolve a marker tag such as `language-kotlin`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.descriptor().tag == tag)
    }

    /// Resolve a canonical id such as `kotlin`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.descriptor().id == id)
    }

    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Look up the descriptor registered for `tag`.
///
/// Unknown tags are not an error; they simply have no descriptor.
///
/// ```
/// use codetabs_core::language::lookup;
///
/// assert_eq!(lookup("language-java").map(|d| d.label), Some("Java"));
/// assert!(lookup("language-python").is_none());
/// ```
pub fn lookup(tag: &str) -> Option<&'static LanguageDescriptor> {
    Language::from_tag(tag).map(Language::descriptor)
}

/// All registered descriptors, in registry order.
pub fn descriptors() -> impl Iterator<Item = &'static LanguageDescriptor> {
    Language::ALL.into_iter().map(Language::descriptor)
}
