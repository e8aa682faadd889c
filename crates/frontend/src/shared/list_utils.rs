//! Helpers shared by list pages: match highlighting and client-side paging
use leptos::prelude::*;
use std::ops::Range;

/// Wraps every case-insensitive occurrence of `needle` in a highlight span.
pub fn highlight_matches(text: &str, needle: &str) -> AnyView {
    let segments = match_segments(text, needle);
    if segments.iter().all(|(_, hit)| !hit) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    segments
        .into_iter()
        .map(|(part, hit)| {
            if hit {
                view! { <mark class="search-hit">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Splits `text` into `(segment, is_match)` pairs.
///
/// Matching is done on lowercase text; when lowercasing changes byte
/// lengths the text is returned unsplit.
fn match_segments(text: &str, needle: &str) -> Vec<(String, bool)> {
    let needle = needle.to_lowercase();
    let lower = text.to_lowercase();
    if needle.is_empty() || lower.len() != text.len() {
        return vec![(text.to_string(), false)];
    }

    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(found) = lower[pos..].find(&needle) {
        let start = pos + found;
        let end = start + needle.len();
        if start > pos {
            out.push((text[pos..start].to_string(), false));
        }
        out.push((text[start..end].to_string(), true));
        pos = end;
    }
    if pos < text.len() {
        out.push((text[pos..].to_string(), false));
    }
    out
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Index range of `page` (0-based), clamped to the last page.
pub fn page_range(count: usize, page: usize, page_size: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..count;
    }
    let page = page.min(total_pages(count, page_size) - 1);
    let start = (page * page_size).min(count);
    start..(start + page_size).min(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segments() {
        let parts = match_segments("REQ-CUST-0001", "cust");
        assert_eq!(
            parts,
            vec![
                ("REQ-".to_string(), false),
                ("CUST".to_string(), true),
                ("-0001".to_string(), false),
            ]
        );
        assert_eq!(match_segments("abc", ""), vec![("abc".to_string(), false)]);
        assert_eq!(match_segments("abc", "zz"), vec![("abc".to_string(), false)]);
        // whitespace is part of the needle
        assert_eq!(
            match_segments("a b", " b"),
            vec![("a".to_string(), false), (" b".to_string(), true)]
        );
        assert_eq!(match_segments("ab", " b"), vec![("ab".to_string(), false)]);
    }

    #[test]
    fn test_paging() {
        assert_eq!(total_pages(0, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(page_range(26, 0, 25), 0..25);
        assert_eq!(page_range(26, 1, 25), 25..26);
        // past the end clamps to the last page
        assert_eq!(page_range(26, 9, 25), 25..26);
        assert_eq!(page_range(0, 0, 25), 0..0);
    }
}
