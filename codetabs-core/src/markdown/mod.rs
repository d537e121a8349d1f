//! Markdown processing pipeline with code-tabs support.

pub mod code_tabs;
pub mod highlight;
pub mod javadoc;

#[cfg(test)]
mod test_integration;

use crate::config::Config;
use crate::render::{HtmlTabs, TabGroupRenderer, SYNC_SCRIPT};
use pulldown_cmark::{html, Event, Options, Parser};

pub use code_tabs::{CodeTabGroup, CodeTabsTransformer};
pub use highlight::HighlightTransformer;
pub use javadoc::JavadocTransformer;

/// Output of a single markdown conversion
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub groups: Vec<CodeTabGroup>,
}

/// Markdown processor with custom extensions
pub struct MarkdownProcessor {
    options: Options,
    config: Config,
    renderer: Box<dyn TabGroupRenderer>,
}

impl MarkdownProcessor {
    pub fn new(config: Config) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self {
            options,
            config,
            renderer: Box::new(HtmlTabs::new()),
        }
    }

    /// Use a different tab group renderer
    pub fn with_renderer(mut self, renderer: impl TabGroupRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert markdown to HTML with all custom transforms
    pub fn convert(&self, markdown: &str) -> RenderedPage {
        let events: Vec<Event<'static>> = Parser::new_ext(markdown, self.options)
            .map(Event::into_static)
            .collect();

        // Group code blocks first, while fences are still plain events
        let tabs = CodeTabsTransformer::new(&self.config.tabs.group, &*self.renderer);
        let (events, groups) = tabs.transform(events);

        let javadoc = JavadocTransformer::new(&self.config.javadoc.base_url);
        let events = javadoc.transform(events);

        // Highlighting also reaches the code inside tab panels
        let events = if self.config.highlight.enabled {
            HighlightTransformer::new(&self.config.highlight.theme).transform(events)
        } else {
            events
        };

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        if !groups.is_empty() && self.config.tabs.inject_script {
            html_output.push_str(SYNC_SCRIPT);
        }

        tracing::debug!(groups = groups.len(), "converted markdown");

        RenderedPage {
            html: html_output,
            groups,
        }
    }

    /// Convert markdown to HTML, discarding group details
    pub fn convert_simple(&self, markdown: &str) -> String {
        self.convert(markdown).html
    }
}

impl Default for MarkdownProcessor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
