use super::*;
use std::collections::VecDeque;

use crate::enhance::sort::CriterionKey;

/// What a click on a registered node does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClickAction {
    Share,
    Sort(CriterionKey),
}

#[derive(Debug, Default)]
pub(crate) struct ListenerStore {
    pub(crate) map: HashMap<NodeId, ClickAction>,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, node_id: NodeId, action: ClickAction) {
        self.map.insert(node_id, action);
    }

    pub(crate) fn get(&self, node_id: NodeId) -> Option<&ClickAction> {
        self.map.get(&node_id)
    }

    /// Drops every sort-control listener. Panel re-renders replace all controls.
    pub(crate) fn clear_sort_controls(&mut self) {
        self.map.retain(|_, action| !matches!(action, ClickAction::Sort(_)));
    }

    /// Walks from `target` up to the nearest ancestor with a listener.
    pub(crate) fn resolve(&self, dom: &Dom, target: NodeId) -> Option<(NodeId, ClickAction)> {
        let mut cursor = Some(target);
        while let Some(node) = cursor {
            if let Some(action) = self.get(node) {
                return Some((node, action.clone()));
            }
            cursor = dom.parent(node);
        }
        None
    }
}

#[derive(Debug)]
pub(crate) struct DiagnosticsState {
    pub(crate) warnings: VecDeque<String>,
    pub(crate) limit: usize,
}

impl Default for DiagnosticsState {
    fn default() -> Self {
        Self {
            warnings: VecDeque::new(),
            limit: 1_000,
        }
    }
}

impl DiagnosticsState {
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        if self.warnings.len() >= self.limit {
            self.warnings.pop_front();
        }
        self.warnings.push_back(message);
    }

    pub(crate) fn take(&mut self) -> Vec<String> {
        self.warnings.drain(..).collect()
    }
}
