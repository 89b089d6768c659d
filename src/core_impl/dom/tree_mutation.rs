use super::*;

impl Dom {
    pub(crate) fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        self.element(node_id)
            .and_then(|e| e.attrs.get(&name.to_ascii_lowercase()).cloned())
    }

    pub(crate) fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let lowered = name.to_ascii_lowercase();
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::Dom("setAttribute target is not an element".into()))?;
        element.attrs.insert(lowered.clone(), value.to_string());
        if lowered == "id" && self.is_connected(node_id) {
            self.rebuild_id_index();
        }
        Ok(())
    }

    pub(crate) fn class_contains(&self, node_id: NodeId, class_name: &str) -> bool {
        self.element(node_id)
            .is_some_and(|element| has_class(element, class_name))
    }

    pub(crate) fn class_add(&mut self, node_id: NodeId, class_name: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::Dom("classList target is not an element".into()))?;
        let mut classes = class_tokens(element.attrs.get("class").map(String::as_str));
        if !classes.iter().any(|name| name == class_name) {
            classes.push(class_name.to_string());
        }
        set_class_attr(element, &classes);
        Ok(())
    }

    fn can_have_children(&self, node_id: NodeId) -> bool {
        matches!(
            self.nodes.get(node_id.0).map(|n| &n.node_type),
            Some(NodeType::Document | NodeType::Element(_))
        )
    }

    fn ensure_insertable(&self, parent: NodeId, child: NodeId, op: &str) -> Result<()> {
        if !self.can_have_children(parent) {
            return Err(Error::Dom(format!("{op} target cannot have children")));
        }
        if !self.is_valid_node(child) || child == self.root || child == parent {
            return Err(Error::Dom(format!("invalid {op} node")));
        }

        // Prevent cycles: parent must not be inside child's subtree.
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(Error::Dom(format!("{op} would create a cycle")));
            }
            cursor = self.parent(node);
        }
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = None;
    }

    // Moves of id-free subtrees leave the index as it was.
    fn reindex_if_identified(&mut self, moved: NodeId) {
        if self.subtree_has_id(moved) {
            self.rebuild_id_index();
        }
    }

    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.ensure_insertable(parent, child, "appendChild")?;
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.reindex_if_identified(child);
        Ok(())
    }

    pub(crate) fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        match self.children(parent).first().copied() {
            Some(reference) => self.insert_before(parent, child, reference),
            None => self.append_child(parent, child),
        }
    }

    pub(crate) fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> Result<()> {
        self.ensure_insertable(parent, child, "insertBefore")?;
        if self.parent(reference) != Some(parent) {
            return Err(Error::Dom(
                "insertBefore reference is not a direct child".into(),
            ));
        }
        if child == reference {
            return Ok(());
        }

        self.detach(child);
        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|id| *id == reference)
            .ok_or_else(|| Error::Dom("insertBefore reference is missing".into()))?;
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(index, child);
        self.reindex_if_identified(child);
        Ok(())
    }

    pub(crate) fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.parent(child) != Some(parent) {
            return Err(Error::Dom("removeChild target is not a direct child".into()));
        }
        self.detach(child);
        self.reindex_if_identified(child);
        Ok(())
    }

    pub(crate) fn remove_node(&mut self, node: NodeId) -> Result<()> {
        if node == self.root {
            return Err(Error::Dom("cannot remove document root".into()));
        }
        match self.parent(node) {
            Some(parent) => self.remove_child(parent, node),
            None => Ok(()),
        }
    }

    pub(crate) fn clear_children(&mut self, node_id: NodeId) -> Result<()> {
        if !self.can_have_children(node_id) {
            return Err(Error::Dom("clear target cannot have children".into()));
        }
        let old_children = std::mem::take(&mut self.nodes[node_id.0].children);
        let mut identified = false;
        for child in old_children {
            self.nodes[child.0].parent = None;
            identified |= self.subtree_has_id(child);
        }
        if identified {
            self.rebuild_id_index();
        }
        Ok(())
    }

    /// Deep-clones `source` into a new detached subtree. The source is left untouched.
    pub(crate) fn clone_subtree(&mut self, source: NodeId) -> Result<NodeId> {
        self.clone_subtree_into(source, None)
    }

    fn clone_subtree_into(&mut self, source: NodeId, parent: Option<NodeId>) -> Result<NodeId> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            let node_type = match &self.nodes[source.0].node_type {
                NodeType::Document => {
                    return Err(Error::Dom("cannot clone the document node".into()));
                }
                other => other.clone(),
            };
            let node = self.create_node(parent, node_type);
            let children = self.nodes[source.0].children.clone();
            for child in children {
                self.clone_subtree_into(child, Some(node))?;
            }
            Ok(node)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_index_follows_moved_and_removed_elements() -> Result<()> {
        let mut dom = parse_html(
            r#"<ul id="list"><li>plain</li><li id="keep">kept</li></ul>
               <p id="twin">1</p><p id="twin">2</p><div id="box"></div>"#,
        )?;
        let list = dom.by_id("list").expect("list exists");
        let target = dom.by_id("box").expect("box exists");
        let plain = dom.child_elements(list)[0];
        let kept = dom.by_id("keep").expect("item exists");
        let first_twin = dom.by_id("twin").expect("twin exists");

        assert!(!dom.subtree_has_id(plain));
        assert!(dom.subtree_has_id(list));
        dom.append_child(target, plain)?;
        dom.append_child(target, kept)?;
        assert_eq!(dom.by_id("keep"), Some(kept));
        assert_eq!(dom.query_selector_all("#box > li")?.len(), 2);

        dom.append_child(target, first_twin)?;
        let twins = dom.query_selector_all("#twin")?;
        assert_eq!(twins.len(), 2);
        assert_eq!(twins[1], first_twin);
        assert_ne!(dom.by_id("twin"), Some(first_twin));

        dom.remove_node(kept)?;
        assert_eq!(dom.by_id("keep"), None);
        dom.clear_children(target)?;
        assert_eq!(dom.query_selector_all("#twin")?.len(), 1);
        assert_eq!(dom.by_id("list"), Some(list));
        Ok(())
    }

    #[test]
    fn detached_element_with_id_is_indexed_once_attached() -> Result<()> {
        let mut dom = parse_html(r#"<div id="host"></div>"#)?;
        let host = dom.by_id("host").expect("host exists");
        let wrapper = dom.create_detached_element("span");
        let inner = dom.create_detached_element("b");
        dom.set_attr(inner, "id", "late")?;
        dom.append_child(wrapper, inner)?;
        dom.prepend_child(host, wrapper)?;
        assert_eq!(dom.by_id("late"), Some(inner));
        Ok(())
    }
}
