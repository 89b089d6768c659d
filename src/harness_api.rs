use super::*;

use crate::enhance::share::{install_share_button, share_request};
use crate::enhance::sort::SortController;

/// Where the enhancements look for their elements, and what the simulated
/// browser supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub url: String,
    pub share_available: bool,
    pub list_selector: String,
    pub panel_selector: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            share_available: true,
            list_selector: "#auto-sort-list".to_string(),
            panel_selector: "#auto-sort-controls".to_string(),
        }
    }
}

impl PageOptions {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_share_available(mut self, available: bool) -> Self {
        self.share_available = available;
        self
    }

    pub fn with_list_selector(mut self, selector: impl Into<String>) -> Self {
        self.list_selector = selector.into();
        self
    }

    pub fn with_panel_selector(mut self, selector: impl Into<String>) -> Self {
        self.panel_selector = selector.into();
        self
    }
}

/// An enhanced page. Autolinks, the share link and the sort panel are
/// installed on construction; clicks are then simulated by selector.
#[derive(Debug)]
pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) options: PageOptions,
    pub(crate) listeners: ListenerStore,
    pub(crate) diagnostics: DiagnosticsState,
    pub(crate) sorter: Option<SortController>,
    pub(crate) share_requests: Vec<ShareRequest>,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_options(html, PageOptions::default())
    }

    pub fn from_html_with_options(html: &str, options: PageOptions) -> Result<Self> {
        let dom = parse_html(html)?;
        let mut page = Self {
            dom,
            options,
            listeners: ListenerStore::default(),
            diagnostics: DiagnosticsState::default(),
            sorter: None,
            share_requests: Vec::new(),
        };
        page.enhance()?;
        Ok(page)
    }

    fn enhance(&mut self) -> Result<()> {
        // Discovery reads summary labels, so it runs before autolinks touch headings.
        let list = self.dom.query_selector(&self.options.list_selector)?;
        let panel = self.dom.query_selector(&self.options.panel_selector)?;
        self.sorter = SortController::build(&self.dom, list, panel, &mut self.diagnostics);
        let controls = match &self.sorter {
            Some(sorter) => sorter.render(&mut self.dom)?,
            None => Vec::new(),
        };
        self.install_sort_listeners(controls);

        if let Some(link) = install_share_button(
            &mut self.dom,
            self.options.share_available,
            &mut self.diagnostics,
        )? {
            self.listeners.add(link, ClickAction::Share);
        }

        crate::enhance::autolink::add_heading_autolinks(&mut self.dom)?;
        Ok(())
    }

    fn install_sort_listeners(&mut self, controls: Vec<(NodeId, CriterionKey)>) {
        self.listeners.clear_sort_controls();
        for (node, key) in controls {
            self.listeners.add(node, ClickAction::Sort(key));
        }
    }

    pub fn url(&self) -> &str {
        &self.options.url
    }

    /// Clicks the first match of `selector`. The click reaches the nearest
    /// enhanced ancestor, if any; other clicks do nothing.
    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let Some((_, action)) = self.listeners.resolve(&self.dom, target) else {
            return Ok(());
        };
        match action {
            ClickAction::Share => {
                let request = share_request(&self.dom, &self.options.url)?;
                log::info!("share requested for {}", request.url);
                self.share_requests.push(request);
            }
            ClickAction::Sort(key) => {
                let Some(sorter) = self.sorter.as_mut() else {
                    return Ok(());
                };
                let controls = sorter.toggle(&mut self.dom, &key)?;
                self.install_sort_listeners(controls);
            }
        }
        Ok(())
    }

    /// Sorts by a criterion directly, as if its control had reached that
    /// order.
    pub fn sort_by(&mut self, category: &str, criterion: &str, ascending: bool) -> Result<()> {
        let key = CriterionKey::new(category, criterion);
        let sorter = self
            .sorter
            .as_mut()
            .ok_or_else(|| Error::SelectorNotFound(self.options.list_selector.clone()))?;
        if !sorter.criteria().contains(&key) {
            return Err(Error::SelectorNotFound(format!("sort criterion {key}")));
        }
        let controls = sorter.sort(&mut self.dom, Some(&key), ascending)?;
        self.install_sort_listeners(controls);
        Ok(())
    }

    /// Restores the original entry order.
    pub fn reset_sort(&mut self) -> Result<()> {
        let sorter = self
            .sorter
            .as_mut()
            .ok_or_else(|| Error::SelectorNotFound(self.options.list_selector.clone()))?;
        let controls = sorter.sort(&mut self.dom, None, true)?;
        self.install_sort_listeners(controls);
        Ok(())
    }

    pub fn active_sort(&self) -> Option<(CriterionKey, SortOrder)> {
        self.sorter.as_ref()?.active().cloned()
    }

    /// Every discovered criterion, grouped by category in first-seen order.
    pub fn criteria(&self) -> Vec<CriterionKey> {
        self.sorter
            .as_ref()
            .map(|sorter| sorter.criteria().keys())
            .unwrap_or_default()
    }

    pub fn share_requests(&self) -> &[ShareRequest] {
        &self.share_requests
    }

    /// Drains the warnings logged since the last call.
    pub fn take_warnings(&mut self) -> Vec<String> {
        self.diagnostics.take()
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    /// Text content of every match, in document order.
    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        Ok(self
            .dom
            .query_selector_all(selector)?
            .into_iter()
            .map(|node| self.dom.text_content(node))
            .collect())
    }

    pub fn attr(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let target = self.select_one(selector)?;
        Ok(self.dom.attr(target, name))
    }

    pub(crate) fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    pub(crate) fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), 200)
    }
}
