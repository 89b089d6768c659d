//! Interactive re-ordering of a list of entries by numeric values found in
//! the sections those entries link to.

use super::*;

mod criteria;
mod items;
mod source;
mod state;
mod value;
mod view;

pub use criteria::CriterionKey;
pub use state::SortOrder;

pub(crate) use criteria::*;
pub(crate) use items::*;
pub(crate) use source::*;
pub(crate) use state::*;
pub(crate) use value::*;
pub(crate) use view::*;

pub(crate) const ENTRY_CLASS: &str = "auto-sort-entry";
pub(crate) const VALUE_CLASS: &str = "auto-sort-value";
pub(crate) const CONTROL_CLASS: &str = "auto-sort-control";
pub(crate) const CATEGORY_CLASS: &str = "auto-sort-category";
pub(crate) const DIRECTION_CLASS: &str = "auto-sort-direction";
pub(crate) const ACTIVE_CLASS: &str = "active";

#[derive(Debug)]
pub(crate) struct SortController {
    list: NodeId,
    panel: NodeId,
    config: SortConfig,
    items: Vec<SortableItem<NodeId>>,
    criteria: CriteriaIndex,
    state: SortState,
}

impl SortController {
    /// Discovers sortable entries below `list`. Returns `None` with a warning
    /// when either element is missing from the page.
    pub(crate) fn build(
        dom: &Dom,
        list: Option<NodeId>,
        panel: Option<NodeId>,
        diagnostics: &mut DiagnosticsState,
    ) -> Option<Self> {
        let (Some(list), Some(panel)) = (list, panel) else {
            diagnostics.warn("no auto-sort list or controls found");
            return None;
        };

        let Discovery { items, criteria } = discover(dom, list);
        log::debug!(
            "auto-sort found {} entries and {} criteria",
            items.len(),
            criteria.keys().len()
        );
        Some(Self {
            list,
            panel,
            config: SortConfig::from_panel(dom, panel),
            items,
            criteria,
            state: SortState::default(),
        })
    }

    pub(crate) fn criteria(&self) -> &CriteriaIndex {
        &self.criteria
    }

    pub(crate) fn active(&self) -> Option<&(CriterionKey, SortOrder)> {
        self.state.active()
    }

    pub(crate) fn view(&self) -> PanelView {
        render_panel(&self.criteria, &self.state, &self.config)
    }

    /// Re-renders the control panel, returning the new control nodes.
    pub(crate) fn render(&self, dom: &mut Dom) -> Result<Vec<(NodeId, CriterionKey)>> {
        apply_panel(dom, self.panel, &self.view())
    }

    /// Advances `key` to its next order and applies it.
    pub(crate) fn toggle(
        &mut self,
        dom: &mut Dom,
        key: &CriterionKey,
    ) -> Result<Vec<(NodeId, CriterionKey)>> {
        match self.state.order_of(key).next() {
            SortOrder::Unsorted => self.sort(dom, None, true),
            SortOrder::Ascending => self.sort(dom, Some(key), true),
            SortOrder::Descending => self.sort(dom, Some(key), false),
        }
    }

    /// Sorts the participating entries by `criterion`, or restores their
    /// original order when `criterion` is `None`. Entries that never took
    /// part stay in front of the sorted ones.
    pub(crate) fn sort(
        &mut self,
        dom: &mut Dom,
        criterion: Option<&CriterionKey>,
        ascending: bool,
    ) -> Result<Vec<(NodeId, CriterionKey)>> {
        let mut order = self
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                let key = match criterion {
                    Some(criterion) => item.key_for(criterion),
                    None => item.index as f64,
                };
                (key, position)
            })
            .collect::<Vec<_>>();
        order.sort_unstable_by(|(left, _), (right, _)| {
            let ordering = left.total_cmp(right);
            if ascending || criterion.is_none() {
                ordering
            } else {
                ordering.reverse()
            }
        });

        for item in &self.items {
            dom.remove_node(item.entry)?;
        }
        for (_, position) in &order {
            let item = &self.items[*position];
            dom.append_child(self.list, item.entry)?;
            dom.class_add(item.entry, ENTRY_CLASS)?;
            self.annotate(dom, item, criterion)?;
        }

        match criterion {
            Some(key) => {
                let direction = if ascending {
                    SortOrder::Ascending
                } else {
                    SortOrder::Descending
                };
                log::debug!("sorted by {key} ({direction:?})");
                self.state.activate(key.clone(), direction);
            }
            None => self.state.reset(),
        }
        self.render(dom)
    }

    fn annotate(
        &self,
        dom: &mut Dom,
        item: &SortableItem<NodeId>,
        criterion: Option<&CriterionKey>,
    ) -> Result<()> {
        for stale in dom.child_elements(item.entry) {
            if dom.is_tag(stale, "span") && dom.class_contains(stale, VALUE_CLASS) {
                dom.remove_node(stale)?;
            }
        }

        let Some(value) = criterion.and_then(|key| item.values.get(key)) else {
            return Ok(());
        };
        let annotation = dom.create_detached_element("span");
        dom.class_add(annotation, VALUE_CLASS)?;
        for child in dom.children(value.cell).to_vec() {
            let copy = dom.clone_subtree(child)?;
            dom.append_child(annotation, copy)?;
        }
        dom.append_child(item.entry, annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = r##"
        <div id="controls" data-sort-descending="absteigend"></div>
        <ul id="list">
          <li><a href="#a">A</a></li>
          <li><a href="#b">B</a></li>
          <li><a href="#c">C</a></li>
        </ul>
        <section id="a"><details><summary>Nutrition</summary><table>
          <tr><td>Weight</td><td>1,5</td></tr></table></details></section>
        <section id="b"><details><summary>Nutrition</summary><table>
          <tr><td>Weight</td><td>2,0</td></tr></table></details></section>
        <section id="c"><details><summary>Nutrition</summary><table>
          <tr><td>Weight</td><td><b>0,8</b> kg</td></tr></table></details></section>
    "##;

    fn controller(dom: &Dom) -> SortController {
        let mut diagnostics = DiagnosticsState::default();
        SortController::build(
            dom,
            dom.by_id("list"),
            dom.by_id("controls"),
            &mut diagnostics,
        )
        .expect("list and controls exist")
    }

    fn entry_order(dom: &Dom) -> Result<Vec<String>> {
        Ok(dom
            .query_selector_all("#list > li > a")?
            .into_iter()
            .map(|link| dom.text_content(link))
            .collect())
    }

    #[test]
    fn toggling_cycles_ascending_descending_and_original() -> Result<()> {
        let mut dom = parse_html(MENU)?;
        let mut sorter = controller(&dom);
        let weight = CriterionKey::new("Nutrition", "Weight");

        sorter.toggle(&mut dom, &weight)?;
        assert_eq!(entry_order(&dom)?, ["C", "A", "B"]);
        assert_eq!(sorter.active(), Some(&(weight.clone(), SortOrder::Ascending)));

        sorter.toggle(&mut dom, &weight)?;
        assert_eq!(entry_order(&dom)?, ["B", "A", "C"]);
        assert_eq!(sorter.config.descending_label, "absteigend");

        sorter.toggle(&mut dom, &weight)?;
        assert_eq!(entry_order(&dom)?, ["A", "B", "C"]);
        assert_eq!(sorter.active(), None);
        assert!(dom.query_selector_all(".auto-sort-value")?.is_empty());
        Ok(())
    }

    #[test]
    fn annotation_copies_the_cell_markup_once() -> Result<()> {
        let mut dom = parse_html(MENU)?;
        let mut sorter = controller(&dom);
        let weight = CriterionKey::new("Nutrition", "Weight");

        sorter.sort(&mut dom, Some(&weight), true)?;
        sorter.sort(&mut dom, Some(&weight), false)?;
        let values = dom.query_selector_all(".auto-sort-value")?;
        assert_eq!(values.len(), 3);
        assert_eq!(
            dom.dump_node(values[2]),
            r#"<span class="auto-sort-value"><b>0,8</b> kg</span>"#
        );
        assert_eq!(dom.query_selector_all("#c b")?.len(), 1);
        assert_eq!(dom.query_selector_all("li.auto-sort-entry")?.len(), 3);
        Ok(())
    }

    #[test]
    fn missing_elements_disable_sorting() -> Result<()> {
        let dom = parse_html(r#"<ul id="list"></ul>"#)?;
        let mut diagnostics = DiagnosticsState::default();
        let sorter = SortController::build(&dom, dom.by_id("list"), None, &mut diagnostics);
        assert!(sorter.is_none());
        assert_eq!(diagnostics.take(), ["no auto-sort list or controls found"]);
        Ok(())
    }
}
