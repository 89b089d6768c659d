use super::*;

pub(crate) const ASCENDING_LABEL_ATTR: &str = "data-sort-ascending";
pub(crate) const DESCENDING_LABEL_ATTR: &str = "data-sort-descending";

/// Accessible names for the direction indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SortConfig {
    pub(crate) ascending_label: String,
    pub(crate) descending_label: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            ascending_label: "ascending".to_string(),
            descending_label: "descending".to_string(),
        }
    }
}

impl SortConfig {
    /// Reads the labels from the panel, falling back to the defaults for
    /// missing attributes.
    pub(crate) fn from_panel(dom: &Dom, panel: NodeId) -> Self {
        let defaults = Self::default();
        Self {
            ascending_label: dom
                .attr(panel, ASCENDING_LABEL_ATTR)
                .unwrap_or(defaults.ascending_label),
            descending_label: dom
                .attr(panel, DESCENDING_LABEL_ATTR)
                .unwrap_or(defaults.descending_label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DirectionMark {
    pub(crate) glyph: char,
    pub(crate) label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ControlView {
    pub(crate) key: CriterionKey,
    pub(crate) order: SortOrder,
    pub(crate) direction: Option<DirectionMark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryView {
    pub(crate) category: String,
    pub(crate) controls: Vec<ControlView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PanelView {
    pub(crate) categories: Vec<CategoryView>,
}

pub(crate) fn render_panel(
    criteria: &CriteriaIndex,
    state: &SortState,
    config: &SortConfig,
) -> PanelView {
    let categories = criteria
        .categories()
        .iter()
        .map(|group| CategoryView {
            category: group.category.clone(),
            controls: group
                .names
                .iter()
                .map(|name| {
                    let key = CriterionKey::new(&group.category, name);
                    let order = state.order_of(&key);
                    let direction = match order {
                        SortOrder::Unsorted => None,
                        SortOrder::Ascending => Some(DirectionMark {
                            glyph: '+',
                            label: config.ascending_label.clone(),
                        }),
                        SortOrder::Descending => Some(DirectionMark {
                            glyph: '-',
                            label: config.descending_label.clone(),
                        }),
                    };
                    ControlView {
                        key,
                        order,
                        direction,
                    }
                })
                .collect(),
        })
        .collect();
    PanelView { categories }
}

/// Replaces the panel's content with `view` and returns every control node
/// together with the criterion it toggles.
pub(crate) fn apply_panel(
    dom: &mut Dom,
    panel: NodeId,
    view: &PanelView,
) -> Result<Vec<(NodeId, CriterionKey)>> {
    dom.clear_children(panel)?;
    let mut controls = Vec::new();

    for group in &view.categories {
        let heading = dom.create_detached_element("span");
        dom.class_add(heading, CATEGORY_CLASS)?;
        dom.create_text(heading, group.category.clone());
        dom.append_child(panel, heading)?;

        for control in &group.controls {
            let link = dom.create_detached_element("a");
            dom.set_attr(link, "href", "#")?;
            dom.class_add(link, CONTROL_CLASS)?;
            dom.set_attr(link, "data-sort-state", &control.order.state_index().to_string())?;
            dom.set_attr(link, "data-sort-category", &control.key.category)?;
            dom.set_attr(link, "data-sort-criterion", &control.key.name)?;
            dom.create_text(link, control.key.name.clone());

            if let Some(direction) = &control.direction {
                dom.class_add(link, ACTIVE_CLASS)?;
                let mark = dom.create_detached_element("span");
                dom.class_add(mark, DIRECTION_CLASS)?;
                dom.set_attr(mark, "title", &direction.label)?;
                dom.set_attr(mark, "aria-label", &direction.label)?;
                dom.create_text(mark, direction.glyph.to_string());
                dom.append_child(link, mark)?;
            }

            dom.append_child(panel, link)?;
            controls.push((link, control.key.clone()));
        }
    }

    Ok(controls)
}
