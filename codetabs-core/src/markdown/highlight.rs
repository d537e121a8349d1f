//! Code syntax highlighting using syntect.

use crate::render::html_escape;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const FALLBACK_THEME: &str = "InspiredGitHub";

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Transformer for syntax highlighting code blocks
pub struct HighlightTransformer {
    theme: Option<&'static Theme>,
}

impl HighlightTransformer {
    pub fn new(theme_name: &str) -> Self {
        let themes = &theme_set().themes;
        let theme = themes.get(theme_name).or_else(|| {
            tracing::warn!("Unknown highlight theme {theme_name:?}, using {FALLBACK_THEME}");
            themes.get(FALLBACK_THEME)
        });
        Self { theme }
    }

    /// Transform events, adding syntax highlighting to fenced code blocks
    pub fn transform(&self, events: Vec<Event<'static>>) -> Vec<Event<'static>> {
        let mut result = Vec::with_capacity(events.len());
        let mut code_lang: Option<String> = None;
        let mut code_content = String::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref info)))
                    if !info.trim().is_empty() =>
                {
                    code_lang = info.split_whitespace().next().map(str::to_string);
                    code_content.clear();
                }
                Event::Text(text) if code_lang.is_some() => {
                    code_content.push_str(text.as_ref());
                }
                Event::End(TagEnd::CodeBlock) if code_lang.is_some() => {
                    if let Some(lang) = code_lang.take() {
                        let highlighted = self.highlight_code(&code_content, &lang);
                        result.push(Event::Html(CowStr::Boxed(highlighted.into_boxed_str())));
                    }
                }
                other => result.push(other),
            }
        }

        result
    }

    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let ss = syntax_set();
        let syntax = ss
            .find_syntax_by_token(lang)
            .or_else(|| ss.find_syntax_by_extension(lang))
            .unwrap_or_else(|| ss.find_syntax_plain_text());

        let highlighted = self
            .theme
            .map(|theme| highlighted_html_for_string(code, ss, syntax, theme));

        match highlighted {
            Some(Ok(html)) => html,
            Some(Err(err)) => {
                tracing::warn!("Highlighting {lang} failed: {err}");
                plain_code(code, lang)
            }
            None => plain_code(code, lang),
        }
    }
}

impl Default for HighlightTransformer {
    fn default() -> Self {
        Self::new(FALLBACK_THEME)
    }
}

fn plain_code(code: &str, lang: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>\n",
        html_escape(lang),
        html_escape(code)
    )
}
