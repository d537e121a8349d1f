//! Integration tests for markdown processing

use super::*;
use crate::assemble::PanelDescriptor;
use crate::render::SyncGroup;
use pulldown_cmark::CowStr;

const PAIR: &str = r#"# Simple example

:::code-tabs
```java
@Test
@AutoParams
void testMethod(int a, int b) {
    var sut = new Calculator();
}
```
```kotlin
@Test
@AutoParams
fun testMethod(a: Int, b: Int) {
    val sut = Calculator()
}
```
:::

Read the [AutoParams javadoc](javadoc:11.1.0/autoparams/AutoParams.html).
"#;

#[test]
fn test_full_pipeline() {
    let processor = MarkdownProcessor::default();
    let page = processor.convert(PAIR);

    println!("HTML: {}", page.html);

    assert_eq!(page.groups.len(), 1);
    assert_eq!(page.groups[0].panels.len(), 2);
    assert!(page.groups[0].panels[1].content.contains("val sut = Calculator()"));

    assert!(page.html.contains(r#"data-sync-group="codeLanguage""#));
    assert!(page.html.contains(">Java</button>"));
    assert!(page.html.contains(">Kotlin</button>"));
    assert!(page.html.contains(r#"target="_blank" rel="noopener noreferrer">AutoParams javadoc</a>"#));
    assert!(page.html.ends_with(SYNC_SCRIPT));
}

#[test]
fn test_panels_are_highlighted() {
    let processor = MarkdownProcessor::default();
    let html = processor.convert_simple(PAIR);

    let panel_start = html.find(r#"role="tabpanel""#).unwrap();
    assert!(html[panel_start..].contains("<pre style="));
}

#[test]
fn test_highlight_disabled() {
    let mut config = Config::default();
    config.highlight.enabled = false;
    let html = MarkdownProcessor::new(config).convert_simple(PAIR);

    assert!(html.contains(r#"<pre><code class="language-kotlin">"#));
}

#[test]
fn test_script_injection_can_be_disabled() {
    let mut config = Config::default();
    config.tabs.inject_script = false;
    let page = MarkdownProcessor::new(config).convert(PAIR);

    assert_eq!(page.groups.len(), 1);
    assert!(!page.html.contains("<script>"));
}

#[test]
fn test_configured_group() {
    let config = Config::from_yaml("tabs:\n  group: jvm\n").unwrap();
    let page = MarkdownProcessor::new(config).convert(PAIR);

    assert_eq!(page.groups[0].group, SyncGroup::new("jvm"));
    assert!(page.html.contains(r#"data-sync-group="jvm""#));
}

#[test]
fn test_conversion_is_deterministic() {
    let processor = MarkdownProcessor::default();
    let first = processor.convert(PAIR);
    let second = processor.convert(PAIR);

    assert_eq!(first.html, second.html);
    assert_eq!(first.groups, second.groups);
}

struct ListRenderer;

impl TabGroupRenderer for ListRenderer {
    fn render(
        &self,
        group: &SyncGroup,
        _instance: usize,
        panels: Vec<PanelDescriptor<Vec<Event<'static>>>>,
    ) -> Vec<Event<'static>> {
        let labels: Vec<_> = panels.iter().map(|p| p.label).collect();
        let html = format!(
            "<ul data-group=\"{}\"><li>{}</li></ul>\n",
            group.key().unwrap_or(""),
            labels.join("</li><li>")
        );
        vec![Event::Html(CowStr::Boxed(html.into_boxed_str()))]
    }
}

#[test]
fn test_custom_renderer() {
    let processor = MarkdownProcessor::default().with_renderer(ListRenderer);
    let html = processor.convert_simple(PAIR);

    assert!(html.contains(r#"<ul data-group="codeLanguage"><li>Java</li><li>Kotlin</li></ul>"#));
    assert!(!html.contains("role=\"tablist\""));
}
