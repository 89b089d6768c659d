use page_enhancer::Page;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{FileFailurePersistence, TestCaseError, TestCaseResult};

const SORT_PROPTEST_REGRESSION_FILE: &str =
    "tests/proptest-regressions/sort_property_fuzz_test.txt";
const DEFAULT_SORT_PROPTEST_CASES: u32 = 64;

fn sort_proptest_cases() -> u32 {
    std::env::var("PAGE_ENHANCER_PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SORT_PROPTEST_CASES)
}

/// Tenths, so every value has an exact decimal-comma rendering.
fn cell_strategy() -> BoxedStrategy<Option<i32>> {
    prop_oneof![
        4 => (-500i32..=500).prop_map(Some),
        1 => Just(None),
    ]
    .boxed()
}

fn menu_html(values: &[Option<i32>]) -> String {
    let mut entries = String::new();
    let mut sections = String::new();
    for (index, value) in values.iter().enumerate() {
        entries.push_str(&format!("<li><a href=\"#dish-{index}\">D{index}</a></li>\n"));
        let cell = match value {
            Some(tenths) => format!("{:.1}", f64::from(*tenths) / 10.0).replace('.', ","),
            None => "-".to_string(),
        };
        sections.push_str(&format!(
            "<section id=\"dish-{index}\"><details><summary>Nutrition</summary><table>\
             <tr><td>Protein</td><td>{cell} g</td></tr></table></details></section>\n"
        ));
    }
    format!(
        "<div id=\"auto-sort-controls\"></div>\n\
         <ul id=\"auto-sort-list\">\n{entries}</ul>\n{sections}"
    )
}

fn fail(error: page_enhancer::Error) -> TestCaseError {
    TestCaseError::fail(format!("{error:?}"))
}

fn keys_in_list_order(page: &Page, values: &[Option<i32>]) -> Result<Vec<i32>, TestCaseError> {
    page.texts("#auto-sort-list > li > a")
        .map_err(fail)?
        .iter()
        .map(|label| {
            label
                .trim_start_matches('D')
                .parse::<usize>()
                .ok()
                .and_then(|index| values.get(index))
                .map(|value| value.unwrap_or(0))
                .ok_or_else(|| TestCaseError::fail(format!("unexpected entry {label}")))
        })
        .collect()
}

fn assert_sort_cycle(values: &[Option<i32>]) -> TestCaseResult {
    let mut page = Page::from_html(&menu_html(values)).map_err(fail)?;
    let original = page.texts("#auto-sort-list > li > a").map_err(fail)?;
    let control = r#"a[data-sort-criterion="Protein"]"#;
    let has_values = values.iter().any(Option::is_some);

    if !has_values {
        prop_assert!(page.assert_exists(control).is_err());
        return Ok(());
    }

    page.click(control).map_err(fail)?;
    let ascending = keys_in_list_order(&page, values)?;
    prop_assert!(ascending.windows(2).all(|pair| pair[0] <= pair[1]), "{ascending:?}");

    page.click(control).map_err(fail)?;
    let descending = keys_in_list_order(&page, values)?;
    prop_assert!(descending.windows(2).all(|pair| pair[0] >= pair[1]), "{descending:?}");

    let annotated = page.texts(".auto-sort-value").map_err(fail)?;
    prop_assert_eq!(annotated.len(), values.iter().filter(|value| value.is_some()).count());

    page.click(control).map_err(fail)?;
    prop_assert_eq!(page.texts("#auto-sort-list > li > a").map_err(fail)?, original.clone());

    page.reset_sort().map_err(fail)?;
    prop_assert_eq!(page.texts("#auto-sort-list > li > a").map_err(fail)?, original);
    prop_assert!(page.texts(".auto-sort-value").map_err(fail)?.is_empty());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: sort_proptest_cases(),
        failure_persistence: Some(Box::new(
            FileFailurePersistence::Direct(SORT_PROPTEST_REGRESSION_FILE),
        )),
        .. ProptestConfig::default()
    })]

    #[test]
    fn sort_cycle_orders_entries_and_restores_them(values in vec(cell_strategy(), 0..=12)) {
        assert_sort_cycle(&values)?;
    }
}
