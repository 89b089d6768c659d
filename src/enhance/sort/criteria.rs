use super::*;
use unicode_normalization::UnicodeNormalization;

/// A sortable quantity, e.g. "Fett" inside the "Nährwerte" category.
///
/// Both labels are NFC-normalized with runs of whitespace collapsed, so
/// "Fe\u{0308}tt " and "Fëtt" name the same criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CriterionKey {
    pub category: String,
    pub name: String,
}

impl CriterionKey {
    pub fn new(category: impl AsRef<str>, name: impl AsRef<str>) -> Self {
        Self {
            category: normalize_label(category.as_ref()),
            name: normalize_label(name.as_ref()),
        }
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.category, self.name)
    }
}

pub(crate) fn normalize_label(raw: &str) -> String {
    let composed = raw.nfc().collect::<String>();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryCriteria {
    pub(crate) category: String,
    pub(crate) names: Vec<String>,
}

/// Every discovered criterion, grouped by category in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CriteriaIndex {
    categories: Vec<CategoryCriteria>,
    known: HashSet<CriterionKey>,
}

impl CriteriaIndex {
    pub(crate) fn insert(&mut self, key: &CriterionKey) {
        if !self.known.insert(key.clone()) {
            return;
        }
        match self
            .categories
            .iter_mut()
            .find(|group| group.category == key.category)
        {
            Some(group) => group.names.push(key.name.clone()),
            None => self.categories.push(CategoryCriteria {
                category: key.category.clone(),
                names: vec![key.name.clone()],
            }),
        }
    }

    pub(crate) fn contains(&self, key: &CriterionKey) -> bool {
        self.known.contains(key)
    }

    pub(crate) fn categories(&self) -> &[CategoryCriteria] {
        &self.categories
    }

    pub(crate) fn keys(&self) -> Vec<CriterionKey> {
        self.categories
            .iter()
            .flat_map(|group| {
                group
                    .names
                    .iter()
                    .map(|name| CriterionKey::new(&group.category, name))
            })
            .collect()
    }
}
