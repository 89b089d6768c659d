use std::sync::LazyLock;

use fancy_regex::Regex;

// A leading number with either `,` or `.` as decimal separator, followed by
// whitespace (units such as "g" or "kcal") or the end of the cell. The
// lookahead rejects mixed notations like "1.234,56".
const LOCALIZED_NUMBER_PATTERN: &str = r"^\s*([+-]?(?:\d+(?:[.,]\d+)?|[.,]\d+))(?=\s|$)";

// Compiled once; a failure is logged here and every cell then reads as text.
static LOCALIZED_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(LOCALIZED_NUMBER_PATTERN)
        .inspect_err(|err| log::error!("localized number pattern does not compile: {err}"))
        .ok()
});

/// Parses a cell value such as `"1,5"`, `"2.0 g"` or `"-0,8"`.
///
/// The decimal comma is normalized to a dot before parsing. Cells without a
/// leading number (including the placeholder `"-"`) yield `None`.
pub(crate) fn parse_localized_number(raw: &str) -> Option<f64> {
    let regex = LOCALIZED_NUMBER.as_ref()?;
    let captures = regex.captures(raw).ok()??;
    let number = captures.get(1)?.as_str().replace(',', ".");
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}
