use super::*;

pub(crate) const AUTOLINK_CLASS: &str = "autolink";

/// Appends `<a class="autolink" href="#id">#</a>` to every `h1`..`h6` carrying an id.
///
/// Returns the number of links added.
pub(crate) fn add_heading_autolinks(dom: &mut Dom) -> Result<usize> {
    let mut added = 0usize;
    for level in 1..=6 {
        for heading in dom.query_selector_all(&format!("h{level}[id]"))? {
            let Some(id) = dom.attr(heading, "id").filter(|id| !id.is_empty()) else {
                continue;
            };

            let link = dom.create_detached_element("a");
            dom.set_attr(link, "class", AUTOLINK_CLASS)?;
            dom.set_attr(link, "href", &format!("#{id}"))?;
            dom.create_text(link, "#".to_string());
            dom.append_child(heading, link)?;
            added += 1;
        }
    }
    log::debug!("added {added} heading autolinks");
    Ok(added)
}
