use super::*;

#[test]
fn headings_with_ids_get_autolinks() -> Result<()> {
    let page = Page::from_html(CANTEEN_HTML)?;
    page.assert_text("#today", "Today#")?;
    assert_eq!(page.attr("#today > a.autolink", "href")?.as_deref(), Some("#today"));
    assert!(page.assert_exists("#soup h2 a").is_err());
    Ok(())
}

#[test]
fn share_link_click_records_a_share_request() -> Result<()> {
    let options = PageOptions::default().with_url("https://mensa.example/today");
    let mut page = Page::from_html_with_options(CANTEEN_HTML, options)?;
    assert_eq!(page.url(), "https://mensa.example/today");
    assert!(page.take_warnings().is_empty());

    page.assert_text("#add-share-button", "Share Print")?;
    page.click("#add-share-button > a")?;
    page.click("#add-share-button > a")?;
    assert_eq!(
        page.share_requests(),
        vec![
            ShareRequest {
                text: Some("Lunch menu".into()),
                title: "Canteen".into(),
                url: "https://mensa.example/today".into(),
            };
            2
        ]
    );

    page.click(r#"#add-share-button a[href="/print"]"#)?;
    assert_eq!(page.share_requests().len(), 2);
    Ok(())
}

#[test]
fn unsupported_share_leaves_the_host_untouched() -> Result<()> {
    let options = PageOptions::default().with_share_available(false);
    let mut page = Page::from_html_with_options(CANTEEN_HTML, options)?;
    assert_eq!(page.take_warnings(), ["share api is unavailable"]);
    assert_eq!(
        page.dump_dom("#add-share-button")?,
        "<p id=\"add-share-button\"><a href=\"/print\">Print</a></p>"
    );
    Ok(())
}

#[test]
fn clicks_outside_enhanced_elements_do_nothing() -> Result<()> {
    let mut page = Page::from_html(CANTEEN_HTML)?;
    page.click("#soup h2")?;
    assert_eq!(entry_order(&page)?, ["Soup", "Pasta", "Salad"]);
    assert!(page.share_requests().is_empty());
    assert_eq!(
        page.click("#nowhere").unwrap_err(),
        Error::SelectorNotFound("#nowhere".into())
    );
    Ok(())
}

#[test]
fn assertion_failures_carry_a_snippet() -> Result<()> {
    let page = Page::from_html(CANTEEN_HTML)?;
    let Err(Error::AssertionFailed {
        actual, dom_snippet, ..
    }) = page.assert_text("#today", "Tomorrow")
    else {
        panic!("assertion should fail");
    };
    assert_eq!(actual, "Today#");
    assert!(dom_snippet.starts_with("<h1 id=\"today\">"));
    Ok(())
}
