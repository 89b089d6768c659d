//! Progressive enhancement of static HTML pages.
//!
//! A page is parsed into an owned, arena-backed document tree and decorated
//! with heading autolinks, a share link and an interactive auto-sort panel.
//! User interaction is simulated through [`Page`], which makes every
//! enhancement testable without a browser.
//!
//! ```
//! use page_enhancer::Page;
//!
//! let html = r#"
//!     <h2 id="menu">Menu</h2>
//!     <div id="auto-sort-controls"></div>
//!     <ul id="auto-sort-list"></ul>
//! "#;
//! let page = Page::from_html(html)?;
//! page.assert_text("#menu", "Menu#")?;
//! # Ok::<(), page_enhancer::Error>(())
//! ```

use std::collections::{HashMap, HashSet};
use std::error::Error as StdError;
use std::fmt;

mod core_dom_utils;
mod core_impl;
mod enhance;
mod harness_api;
mod runtime_state;
mod selector;

pub(crate) use core_dom_utils::*;
pub(crate) use core_impl::parse_html;
pub(crate) use runtime_state::*;
pub(crate) use selector::*;

pub use enhance::share::ShareRequest;
pub use enhance::sort::{CriterionKey, SortOrder};
pub use harness_api::{Page, PageOptions};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    SelectorNotFound(String),
    UnsupportedSelector(String),
    Dom(String),
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::SelectorNotFound(selector) => write!(f, "selector not found: {selector}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::Dom(msg) => write!(f, "dom error: {msg}"),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests;
