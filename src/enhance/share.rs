use super::*;

pub(crate) const SHARE_HOST_ID: &str = "add-share-button";
const SHARE_HREF: &str = "javascript:void(0);";

/// A request handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Content of `<meta name="description">`, when present.
    pub text: Option<String>,
    pub title: String,
    pub url: String,
}

/// Places a share link at the start of `#add-share-button`.
///
/// Returns the link node, or `None` when sharing is unsupported or the host
/// element is missing. Both cases are reported as warnings, not errors.
pub(crate) fn install_share_button(
    dom: &mut Dom,
    share_available: bool,
    diagnostics: &mut DiagnosticsState,
) -> Result<Option<NodeId>> {
    if !share_available {
        diagnostics.warn("share api is unavailable");
        return Ok(None);
    }

    let Some(host) = dom.by_id(SHARE_HOST_ID) else {
        diagnostics.warn("no share to add");
        return Ok(None);
    };

    let link = dom.create_detached_element("a");
    dom.set_attr(link, "href", SHARE_HREF)?;
    dom.create_text(link, share_label(dom).to_string());

    let spacer = dom.create_detached_text(" ");
    dom.prepend_child(host, spacer)?;
    dom.prepend_child(host, link)?;
    Ok(Some(link))
}

fn share_label(dom: &Dom) -> &'static str {
    let lang = dom
        .document_element()
        .filter(|root| dom.is_tag(*root, "html"))
        .and_then(|root| dom.attr(root, "lang"));
    if lang.as_deref() == Some("de") {
        "Teilen"
    } else {
        "Share"
    }
}

pub(crate) fn share_request(dom: &Dom, url: &str) -> Result<ShareRequest> {
    let text = dom
        .query_selector("meta[name=description]")?
        .and_then(|meta| dom.attr(meta, "content"));
    Ok(ShareRequest {
        text,
        title: dom.document_title(),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_prepended_with_a_spacer() -> Result<()> {
        let mut dom = parse_html(r#"<p id="add-share-button"><a href="/print">Print</a></p>"#)?;
        let mut diagnostics = DiagnosticsState::default();
        let link = install_share_button(&mut dom, true, &mut diagnostics)?;
        assert!(link.is_some());
        assert_eq!(
            dom.dump_node(dom.root),
            "<p id=\"add-share-button\"><a href=\"javascript:void(0);\">Share</a> \
             <a href=\"/print\">Print</a></p>"
        );
        assert!(diagnostics.take().is_empty());
        Ok(())
    }

    #[test]
    fn german_pages_get_a_german_label() -> Result<()> {
        let mut dom =
            parse_html(r#"<html lang="de"><body><span id="add-share-button"></span></body></html>"#)?;
        let mut diagnostics = DiagnosticsState::default();
        let link = install_share_button(&mut dom, true, &mut diagnostics)?
            .expect("share host exists");
        assert_eq!(dom.text_content(link), "Teilen");
        Ok(())
    }

    #[test]
    fn missing_support_or_host_only_warns() -> Result<()> {
        let mut dom = parse_html(r#"<span id="add-share-button"></span>"#)?;
        let mut diagnostics = DiagnosticsState::default();
        assert_eq!(install_share_button(&mut dom, false, &mut diagnostics)?, None);

        let mut bare = parse_html("<p>nothing here</p>")?;
        assert_eq!(install_share_button(&mut bare, true, &mut diagnostics)?, None);
        assert_eq!(
            diagnostics.take(),
            vec!["share api is unavailable".to_string(), "no share to add".to_string()]
        );
        Ok(())
    }

    #[test]
    fn request_reads_description_title_and_url() -> Result<()> {
        let dom = parse_html(
            r#"<html><head><title> Mensa   Süd </title>
               <meta name="description" content="Today's menu"></head></html>"#,
        )?;
        let request = share_request(&dom, "https://example.test/menu")?;
        assert_eq!(
            request,
            ShareRequest {
                text: Some("Today's menu".into()),
                title: "Mensa Süd".into(),
                url: "https://example.test/menu".into(),
            }
        );
        Ok(())
    }
}
