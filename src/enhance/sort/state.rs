use super::*;

/// Ordering applied by a sort control. Clicking a control advances it
/// through `Unsorted -> Ascending -> Descending -> Unsorted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            Self::Unsorted => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Unsorted,
        }
    }

    /// Value written to `data-sort-state`.
    pub(crate) fn state_index(self) -> u8 {
        match self {
            Self::Unsorted => 0,
            Self::Ascending => 1,
            Self::Descending => 2,
        }
    }
}

/// At most one criterion is active at a time; every other control reads as
/// unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SortState {
    active: Option<(CriterionKey, SortOrder)>,
}

impl SortState {
    pub(crate) fn order_of(&self, key: &CriterionKey) -> SortOrder {
        match &self.active {
            Some((active, order)) if active == key => *order,
            _ => SortOrder::Unsorted,
        }
    }

    pub(crate) fn activate(&mut self, key: CriterionKey, order: SortOrder) {
        self.active = match order {
            SortOrder::Unsorted => None,
            order => Some((key, order)),
        };
    }

    pub(crate) fn reset(&mut self) {
        self.active = None;
    }

    pub(crate) fn active(&self) -> Option<&(CriterionKey, SortOrder)> {
        self.active.as_ref()
    }
}
