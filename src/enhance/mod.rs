//! Page enhancements applied after parsing: the auto-sort controller, the
//! share link, then heading autolinks.

use super::*;

pub(crate) mod autolink;
pub(crate) mod share;
pub(crate) mod sort;
