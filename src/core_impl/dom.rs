use super::html::is_void_tag;
use super::*;

mod content;
mod nodes;
mod query;
mod tree_mutation;
