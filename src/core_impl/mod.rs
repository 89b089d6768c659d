use super::*;

mod dom;
mod html;

pub(crate) fn parse_html(html: &str) -> Result<Dom> {
    html::parse_html(html)
}
