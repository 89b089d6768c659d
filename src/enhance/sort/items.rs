use super::*;

/// A parsed cell: the sort key plus the cell whose content is shown next to
/// the entry while this criterion is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SortValue<N> {
    pub(crate) key: f64,
    pub(crate) cell: N,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SortableItem<N> {
    pub(crate) entry: N,
    /// Position among participating entries at discovery time.
    pub(crate) index: usize,
    pub(crate) values: HashMap<CriterionKey, SortValue<N>>,
}

impl<N> SortableItem<N> {
    /// Items without a value for the criterion sort as `0.0`.
    pub(crate) fn key_for(&self, criterion: &CriterionKey) -> f64 {
        self.values.get(criterion).map_or(0.0, |value| value.key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Discovery<N> {
    pub(crate) items: Vec<SortableItem<N>>,
    pub(crate) criteria: CriteriaIndex,
}

/// Walks the list entries and the sections they link to.
///
/// Entries without an in-page link to an existing `section` do not take part
/// in sorting. Rows are skipped unless they sit in a labelled `details`, have
/// exactly two cells and the second cell starts with a number.
pub(crate) fn discover<S: SortSource>(source: &S, list: S::Node) -> Discovery<S::Node> {
    let mut items = Vec::new();
    let mut criteria = CriteriaIndex::default();

    for entry in source.list_entries(list) {
        let Some(fragment) = source.entry_fragment(entry) else {
            continue;
        };
        let Some(section) = source.section_by_id(&fragment) else {
            log::debug!("entry links to #{fragment}, which is not a section");
            continue;
        };

        let mut values = HashMap::new();
        for row in source.table_rows(section) {
            let Some((key, value)) = read_row(source, row) else {
                continue;
            };
            criteria.insert(&key);
            values.entry(key).or_insert(value);
        }

        items.push(SortableItem {
            entry,
            index: items.len(),
            values,
        });
    }

    Discovery { items, criteria }
}

fn read_row<S: SortSource>(source: &S, row: S::Node) -> Option<(CriterionKey, SortValue<S::Node>)> {
    let category = source.disclosure_label(row)?;
    let cells = source.data_cells(row);
    let [label_cell, value_cell] = cells.as_slice() else {
        return None;
    };
    let key = CriterionKey::new(category, source.text_of(*label_cell));
    if key.name.is_empty() {
        return None;
    }
    let number = parse_localized_number(&source.text_of(*value_cell))?;
    Some((
        key,
        SortValue {
            key: number,
            cell: *value_cell,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A hand-built tree keyed by small integers.
    #[derive(Default)]
    struct FakeSource {
        entries: Vec<(u32, Option<&'static str>)>,
        sections: HashMap<&'static str, u32>,
        rows: HashMap<u32, Vec<u32>>,
        labels: HashMap<u32, &'static str>,
        cells: HashMap<u32, Vec<u32>>,
        texts: HashMap<u32, &'static str>,
    }

    impl SortSource for FakeSource {
        type Node = u32;

        fn list_entries(&self, _list: u32) -> Vec<u32> {
            self.entries.iter().map(|(node, _)| *node).collect()
        }

        fn entry_fragment(&self, entry: u32) -> Option<String> {
            self.entries
                .iter()
                .find(|(node, _)| *node == entry)
                .and_then(|(_, fragment)| fragment.map(str::to_string))
        }

        fn section_by_id(&self, id: &str) -> Option<u32> {
            self.sections.get(id).copied()
        }

        fn table_rows(&self, section: u32) -> Vec<u32> {
            self.rows.get(&section).cloned().unwrap_or_default()
        }

        fn disclosure_label(&self, row: u32) -> Option<String> {
            self.labels.get(&row).map(|label| label.to_string())
        }

        fn data_cells(&self, row: u32) -> Vec<u32> {
            self.cells.get(&row).cloned().unwrap_or_default()
        }

        fn text_of(&self, node: u32) -> String {
            self.texts.get(&node).copied().unwrap_or_default().to_string()
        }
    }

    fn row(
        source: &mut FakeSource,
        row: u32,
        label: Option<&'static str>,
        cells: &[(u32, &'static str)],
    ) {
        if let Some(label) = label {
            source.labels.insert(row, label);
        }
        source.cells.insert(row, cells.iter().map(|(cell, _)| *cell).collect());
        for &(cell, text) in cells {
            source.texts.insert(cell, text);
        }
    }

    #[test]
    fn discovery_filters_entries_and_rows() {
        let mut source = FakeSource {
            entries: vec![(1, Some("soup")), (2, None), (3, Some("missing")), (4, Some("salad"))],
            ..FakeSource::default()
        };
        source.sections.insert("soup", 10);
        source.sections.insert("salad", 20);
        source.rows.insert(10, vec![100, 101, 102, 103, 104]);
        source.rows.insert(20, vec![200]);

        row(&mut source, 100, Some("Nutrition"), &[(1000, "Weight"), (1001, "1,5 kg")]);
        row(&mut source, 101, None, &[(1010, "Fat"), (1011, "3")]);
        row(&mut source, 102, Some("Nutrition"), &[(1020, "Salt"), (1021, "-")]);
        row(&mut source, 103, Some("Nutrition"), &[(1030, "Sugar")]);
        row(&mut source, 104, Some("Nutrition"), &[(1040, "Weight"), (1041, "9")]);
        row(&mut source, 200, Some("Nutrition"), &[(2000, "Protein"), (2001, "0.8")]);

        let discovery = discover(&source, 0);

        let entries = discovery.items.iter().map(|item| item.entry).collect::<Vec<_>>();
        assert_eq!(entries, vec![1, 4]);
        assert_eq!(discovery.items[1].index, 1);

        let weight = CriterionKey::new("Nutrition", "Weight");
        let soup = &discovery.items[0];
        assert_eq!(soup.values.len(), 1);
        assert_eq!(soup.values[&weight], SortValue { key: 1.5, cell: 1001 });
        assert_eq!(soup.key_for(&CriterionKey::new("Nutrition", "Protein")), 0.0);

        assert_eq!(
            discovery.criteria.keys(),
            vec![weight, CriterionKey::new("Nutrition", "Protein")]
        );
    }
}
