//! Regex scanning helpers over raw page HTML.
//!
//! The pages involved are server-rendered and structurally stable, so the
//! handful of elements we need are located by class/itemprop markers
//! rather than by building a DOM. Class names match as whole tokens within
//! the `class` attribute, the way CSS class selection works.

use regex::Regex;

/// Regex fragment matching a `class` attribute that carries `class` as a
/// whole space-separated token (or token run, for multi-class markers).
fn class_attr_pattern(class: &str) -> String {
    format!(
        r#"class\s*=\s*["'](?:[^"']*\s)?{}(?:\s[^"']*)?["']"#,
        regex::escape(class)
    )
}

/// Slice out the block starting at the element carrying `class`, up to
/// (not including) the next occurrence of `end_tag`.
pub(crate) fn class_block<'a>(html: &'a str, class: &str, end_tag: &str) -> Option<&'a str> {
    let marker = Regex::new(&class_attr_pattern(class)).expect("valid regex");
    let start = marker.find(html)?.start();
    let rest = &html[start..];
    let end = rest.find(end_tag).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Slice out one block per element carrying `class`, each running up to
/// the next such element (or the end of the document). Preserves document
/// order.
pub(crate) fn class_blocks<'a>(html: &'a str, class: &str) -> Vec<&'a str> {
    let marker = Regex::new(&class_attr_pattern(class)).expect("valid regex");
    let starts: Vec<usize> = marker.find_iter(html).map(|m| m.start()).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(html.len());
            &html[start..end]
        })
        .collect()
}

/// All `(href, text)` anchor pairs in a block, in document order.
pub(crate) fn anchors(block: &str) -> Vec<(String, String)> {
    let re = Regex::new(r#"(?i)<a\s[^>]*href\s*=\s*["']([^"']+)["'][^>]*>([^<]*)</a>"#)
        .expect("valid regex");
    re.captures_iter(block)
        .map(|cap| (cap[1].to_owned(), cap[2].trim().to_owned()))
        .collect()
}

/// The href of the first anchor in a block.
pub(crate) fn first_href(block: &str) -> Option<String> {
    let re = Regex::new(r#"(?i)<a\s[^>]*href\s*=\s*["']([^"']+)["']"#).expect("valid regex");
    re.captures(block).map(|cap| cap[1].to_owned())
}

/// Trimmed text content of the first element carrying `class`.
/// `Some("")` when the element exists but is empty.
pub(crate) fn class_text(html: &str, class: &str) -> Option<String> {
    let re = Regex::new(&format!(r"{}[^>]*>\s*([^<]*)", class_attr_pattern(class)))
        .expect("valid regex");
    re.captures(html).map(|cap| cap[1].trim().to_owned())
}

/// Trimmed text content of the first element with the given `itemprop`
/// attribute value.
pub(crate) fn itemprop_text(html: &str, itemprop: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r#"itemprop\s*=\s*["']{}["'][^>]*>\s*([^<]*)"#,
        regex::escape(itemprop)
    ))
    .expect("valid regex");
    re.captures(html).map(|cap| cap[1].trim().to_owned())
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
