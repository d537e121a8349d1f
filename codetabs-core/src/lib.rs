//! # codetabs-core
//!
//! Core library for rendering Java/Kotlin code samples as synchronized tabs.
//!
//! Content nodes are classified by their `language-*` marker, looked up in
//! the [`language`] registry and assembled into [`PanelDescriptor`]s, which a
//! [`TabGroupRenderer`] turns into markup. The [`markdown`] module wires this
//! into a pulldown-cmark pipeline.

pub mod assemble;
pub mod config;
pub mod language;
pub mod markdown;
pub mod node;
pub mod render;

pub use assemble::{assemble, into_panels, PanelDescriptor};
pub use config::{Config, ConfigError};
pub use language::{lookup, Language, LanguageDescriptor};
pub use markdown::{CodeTabGroup, MarkdownProcessor, RenderedPage};
pub use node::{classify, ContentNode};
pub use render::{HtmlTabs, SyncGroup, TabGroupRenderer, SYNC_SCRIPT};
