use scraper::Html;

/// Elements whose text content is never page text
const NON_CONTENT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Flattens an HTML document to its text content
///
/// Every text node of the document is joined with a newline, so text from
/// adjacent elements never runs together. Text inside `script`, `style` and
/// `template` elements is skipped.
///
/// ```
/// use medcrawl::extract::page_text;
///
/// let text = page_text("<p>Dr. <b>Jane</b> Smith</p><p>MBBS</p>");
/// assert_eq!(text, "Dr. \nJane\n Smith\nMBBS");
/// ```
pub fn page_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let texts: Vec<&str> = document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| NON_CONTENT_ELEMENTS.contains(&e.name()))
            });
            (!hidden).then_some(&**text)
        })
        .collect();

    texts.join("\n")
}
