//! HTML rendering of assembled panels as a synchronized tab group.
//!
//! The markup follows the WAI-ARIA tabs pattern. Each group container carries
//! a `data-sync-group` attribute; [`SYNC_SCRIPT`] keeps every group sharing
//! that key on the same page showing the same language and remembers the
//! last choice in `localStorage`.

use crate::assemble::PanelDescriptor;
use pulldown_cmark::{CowStr, Event};
use serde::{Deserialize, Serialize};

/// Key shared by tab groups that switch language together.
///
/// An empty key means the group is not synchronized with anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SyncGroup(Option<String>);

impl SyncGroup {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            Self(None)
        } else {
            Self(Some(key.to_string()))
        }
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn key(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<String> for SyncGroup {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for SyncGroup {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<SyncGroup> for String {
    fn from(group: SyncGroup) -> Self {
        group.0.unwrap_or_default()
    }
}

/// Turns assembled panels into markdown events.
///
/// `instance` is the zero-based position of the group on the page and is
/// used to keep element ids unique.
pub trait TabGroupRenderer {
    fn render(
        &self,
        group: &SyncGroup,
        instance: usize,
        panels: Vec<PanelDescriptor<Vec<Event<'static>>>>,
    ) -> Vec<Event<'static>>;
}

/// Default renderer producing ARIA tab markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlTabs;

impl HtmlTabs {
    pub fn new() -> Self {
        Self
    }

    /// Render panels whose content is already HTML.
    pub fn render_html<P: AsRef<str>>(
        &self,
        group: &SyncGroup,
        instance: usize,
        panels: &[PanelDescriptor<P>],
    ) -> String {
        if panels.is_empty() {
            return String::new();
        }

        let mut html = self.open(group, instance, panels);
        for (idx, panel) in panels.iter().enumerate() {
            html.push_str(&self.panel_open(instance, idx, panel));
            html.push_str(panel.content.as_ref());
            html.push_str(&self.panel_close());
        }
        html.push_str(&self.close());
        html
    }

    fn open<P>(&self, group: &SyncGroup, instance: usize, panels: &[PanelDescriptor<P>]) -> String {
        let mut html = String::from(r#"<div class="code-tabs""#);
        if let Some(key) = group.key() {
            html.push_str(&format!(r#" data-sync-group="{}""#, html_escape(key)));
        }
        html.push_str(">\n<div class=\"code-tabs__list\" role=\"tablist\">\n");

        for (idx, panel) in panels.iter().enumerate() {
            let active = idx == 0;
            html.push_str(&format!(
                r#"<button type="button" role="tab" class="code-tabs__tab{}" id="{}" aria-controls="{}" aria-selected="{}" tabindex="{}" data-value="{}">{}</button>"#,
                if active { " code-tabs__tab--active" } else { "" },
                tab_id(instance, idx),
                panel_id(instance, idx),
                active,
                if active { 0 } else { -1 },
                html_escape(panel.id),
                html_escape(panel.label),
            ));
            html.push('\n');
        }

        html.push_str("</div>\n");
        html
    }

    fn panel_open<P>(&self, instance: usize, idx: usize, panel: &PanelDescriptor<P>) -> String {
        format!(
            "<div class=\"code-tabs__panel\" role=\"tabpanel\" id=\"{}\" aria-labelledby=\"{}\" data-value=\"{}\"{}>\n",
            panel_id(instance, idx),
            tab_id(instance, idx),
            html_escape(panel.id),
            if idx == 0 { "" } else { " hidden" },
        )
    }

    fn panel_close(&self) -> String {
        "</div>\n".to_string()
    }

    fn close(&self) -> String {
        "</div>\n".to_string()
    }
}

impl TabGroupRenderer for HtmlTabs {
    fn render(
        &self,
        group: &SyncGroup,
        instance: usize,
        panels: Vec<PanelDescriptor<Vec<Event<'static>>>>,
    ) -> Vec<Event<'static>> {
        if panels.is_empty() {
            return Vec::new();
        }

        let mut out = vec![html_event(self.open(group, instance, &panels))];
        for (idx, panel) in panels.into_iter().enumerate() {
            out.push(html_event(self.panel_open(instance, idx, &panel)));
            out.extend(panel.content);
            out.push(html_event(self.panel_close()));
        }
        out.push(html_event(self.close()));
        out
    }
}

fn tab_id(instance: usize, idx: usize) -> String {
    format!("codetabs-{instance}-tab-{idx}")
}

fn panel_id(instance: usize, idx: usize) -> String {
    format!("codetabs-{instance}-panel-{idx}")
}

fn html_event(html: String) -> Event<'static> {
    Event::Html(CowStr::Boxed(html.into_boxed_str()))
}

pub(crate) fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Client-side selection sync for rendered tab groups.
pub const SYNC_SCRIPT: &str = r#"<script>
(function () {
  var STORAGE_PREFIX = "codetabs.";

  function select(container, value, clicked) {
    var tabs = container.querySelectorAll('[role="tab"]');
    var target = clicked || null;
    for (var i = 0; !target && i < tabs.length; i++) {
      if (tabs[i].getAttribute("data-value") === value) {
        target = tabs[i];
      }
    }
    if (!target) {
      return;
    }
    for (var j = 0; j < tabs.length; j++) {
      var active = tabs[j] === target;
      tabs[j].setAttribute("aria-selected", active ? "true" : "false");
      tabs[j].setAttribute("tabindex", active ? "0" : "-1");
      tabs[j].classList.toggle("code-tabs__tab--active", active);
      var panel = document.getElementById(tabs[j].getAttribute("aria-controls"));
      if (panel) {
        panel.hidden = !active;
      }
    }
  }

  function eachGroup(key, skip, fn) {
    var all = document.querySelectorAll(".code-tabs[data-sync-group]");
    for (var i = 0; i < all.length; i++) {
      if (all[i] !== skip && all[i].getAttribute("data-sync-group") === key) {
        fn(all[i]);
      }
    }
  }

  document.addEventListener("click", function (event) {
    var tab = event.target.closest ? event.target.closest('.code-tabs [role="tab"]') : null;
    if (!tab) {
      return;
    }
    var container = tab.closest(".code-tabs");
    var value = tab.getAttribute("data-value");
    select(container, value, tab);

    var key = container.getAttribute("data-sync-group");
    if (!key) {
      return;
    }
    eachGroup(key, container, function (other) {
      select(other, value);
    });
    try {
      window.localStorage.setItem(STORAGE_PREFIX + key, value);
    } catch (e) {}
  });

  function restore() {
    var seen = {};
    var all = document.querySelectorAll(".code-tabs[data-sync-group]");
    for (var i = 0; i < all.length; i++) {
      var key = all[i].getAttribute("data-sync-group");
      if (seen[key]) {
        continue;
      }
      seen[key] = true;
      var value = null;
      try {
        value = window.localStorage.getItem(STORAGE_PREFIX + key);
      } catch (e) {}
      if (value) {
        eachGroup(key, null, function (group) {
          select(group, value);
        });
      }
    }
  }

  if (document.readyState === "loading") {
    document.addEventListener("DOMContentLoaded", restore);
  } else {
    restore();
  }
})();
</script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::into_panels;
    use crate::node::ContentNode;
    use pulldown_cmark::html;

    fn html_panels() -> Vec<PanelDescriptor<String>> {
        into_panels(vec![
            ContentNode::tagged("language-java", "<pre>java</pre>".to_string()),
            ContentNode::tagged("language-kotlin", "<pre>kotlin</pre>".to_string()),
        ])
    }

    #[test]
    fn test_sync_group_normalizes_empty_keys() {
        assert_eq!(SyncGroup::new("").key(), None);
        assert_eq!(SyncGroup::new("  ").key(), None);
        assert_eq!(SyncGroup::new(" codeLanguage ").key(), Some("codeLanguage"));
        assert_eq!(String::from(SyncGroup::none()), "");
    }

    #[test]
    fn test_render_html_structure() {
        let html = HtmlTabs::new().render_html(&SyncGroup::new("codeLanguage"), 0, &html_panels());

        assert!(html.starts_with(r#"<div class="code-tabs" data-sync-group="codeLanguage">"#));
        assert!(html.contains(r#"role="tablist""#));
        assert_eq!(html.matches(r#"role="tab""#).count(), 2);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 2);
        assert!(html.contains(r#"aria-selected="true" tabindex="0" data-value="java">Java</button>"#));
        assert!(html.contains(r#"aria-selected="false" tabindex="-1" data-value="kotlin">Kotlin</button>"#));
        assert!(html.contains(r#"data-value="kotlin" hidden>"#));
        assert!(html.find("<pre>java</pre>") < html.find("<pre>kotlin</pre>"));
    }

    #[test]
    fn test_render_without_sync_group() {
        let html = HtmlTabs::new().render_html(&SyncGroup::none(), 0, &html_panels());
        assert!(html.starts_with("<div class=\"code-tabs\">\n"));
        assert!(!html.contains("data-sync-group"));
    }

    #[test]
    fn test_empty_panels_render_nothing() {
        let empty: Vec<PanelDescriptor<String>> = Vec::new();
        assert_eq!(HtmlTabs::new().render_html(&SyncGroup::none(), 0, &empty), "");
        assert!(HtmlTabs::new().render(&SyncGroup::none(), 0, Vec::new()).is_empty());
    }

    #[test]
    fn test_element_ids_unique_across_instances_and_duplicates() {
        let panels = into_panels(vec![
            ContentNode::tagged("language-java", "a"),
            ContentNode::tagged("language-java", "b"),
        ]);
        let renderer = HtmlTabs::new();
        let first = renderer.render_html(&SyncGroup::none(), 0, &panels);
        let second = renderer.render_html(&SyncGroup::none(), 1, &panels);

        assert!(first.contains(r#"id="codetabs-0-tab-0""#));
        assert!(first.contains(r#"id="codetabs-0-tab-1""#));
        assert!(second.contains(r#"id="codetabs-1-panel-1""#));
    }

    #[test]
    fn test_sync_group_is_escaped() {
        let html = HtmlTabs::new().render_html(&SyncGroup::new(r#"a"b"#), 0, &html_panels());
        assert!(html.contains(r#"data-sync-group="a&quot;b""#));
    }

    #[test]
    fn test_render_events_wraps_payload() {
        let panels = into_panels(vec![ContentNode::tagged(
            "language-kotlin",
            vec![Event::Text(CowStr::Borrowed("val x = 1"))],
        )]);
        let events = HtmlTabs::new().render(&SyncGroup::new("g"), 3, panels);

        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());

        assert!(out.contains(r#"data-sync-group="g""#));
        assert!(out.contains("val x = 1"));
        assert!(out.contains(r#"id="codetabs-3-panel-0""#));
        assert!(out.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_sync_script_uses_group_storage_key() {
        assert!(SYNC_SCRIPT.starts_with("<script>"));
        assert!(SYNC_SCRIPT.contains("codetabs."));
        assert!(SYNC_SCRIPT.contains("data-sync-group"));
    }
}
