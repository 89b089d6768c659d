use super::*;

/// Read-only queries the sort discovery needs from a document.
///
/// Discovery only ever goes through this trait, so it can run against any
/// tree that answers these questions, not just [`Dom`].
pub(crate) trait SortSource {
    type Node: Copy + Eq + fmt::Debug;

    /// `li` children of the list, in document order.
    fn list_entries(&self, list: Self::Node) -> Vec<Self::Node>;

    /// Fragment of the entry's first in-page link, without the leading `#`.
    fn entry_fragment(&self, entry: Self::Node) -> Option<String>;

    /// The element with this id, only if it is a `section`.
    fn section_by_id(&self, id: &str) -> Option<Self::Node>;

    fn table_rows(&self, section: Self::Node) -> Vec<Self::Node>;

    /// Trimmed, non-empty `summary` text of the nearest enclosing `details`.
    fn disclosure_label(&self, row: Self::Node) -> Option<String>;

    /// `td` children of the row.
    fn data_cells(&self, row: Self::Node) -> Vec<Self::Node>;

    fn text_of(&self, node: Self::Node) -> String;
}

impl SortSource for Dom {
    type Node = NodeId;

    fn list_entries(&self, list: NodeId) -> Vec<NodeId> {
        self.child_elements(list)
            .into_iter()
            .filter(|child| self.is_tag(*child, "li"))
            .collect()
    }

    fn entry_fragment(&self, entry: NodeId) -> Option<String> {
        let mut descendants = Vec::new();
        self.collect_elements_descendants_dfs(entry, &mut descendants);
        descendants
            .into_iter()
            .filter(|node| self.is_tag(*node, "a"))
            .find_map(|link| {
                let href = self.attr(link, "href")?;
                href.strip_prefix('#').map(str::to_string)
            })
            .filter(|fragment| !fragment.is_empty())
    }

    fn section_by_id(&self, id: &str) -> Option<NodeId> {
        self.by_id(id).filter(|node| self.is_tag(*node, "section"))
    }

    fn table_rows(&self, section: NodeId) -> Vec<NodeId> {
        let mut descendants = Vec::new();
        self.collect_elements_descendants_dfs(section, &mut descendants);
        descendants.retain(|node| self.is_tag(*node, "tr"));
        descendants
    }

    fn disclosure_label(&self, row: NodeId) -> Option<String> {
        let details = self.find_ancestor_by_tag(row, "details")?;
        let summary = self
            .child_elements(details)
            .into_iter()
            .find(|child| self.is_tag(*child, "summary"))?;
        let label = self.text_content(summary).trim().to_string();
        (!label.is_empty()).then_some(label)
    }

    fn data_cells(&self, row: NodeId) -> Vec<NodeId> {
        self.child_elements(row)
            .into_iter()
            .filter(|child| self.is_tag(*child, "td"))
            .collect()
    }

    fn text_of(&self, node: NodeId) -> String {
        self.text_content(node)
    }
}
