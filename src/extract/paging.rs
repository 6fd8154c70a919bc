//! Pagination planning for the paged trade listing.

use crate::dom::DomNode;

/// Fixed page size of the source paging endpoint.
pub const PAGE_SIZE: u32 = 15;

/// Time-span sentinel meaning "all time" in the source protocol.
pub const TIME_SPAN_ALL: &str = "20000";

/// Reads the page count from the paging indicator elements.
///
/// The indicator repeats the page numbers; the last parsable one is the
/// count. Missing or unparsable indicators are non-fatal and default to a
/// single page, the common case for small accounts.
pub fn page_count<N: DomNode>(doc: &N, indicator_selector: &str) -> u32 {
    let mut count = 1;
    for node in doc.select(indicator_selector) {
        if let Ok(parsed) = node.text().trim().parse::<u32>() {
            count = parsed;
        }
    }
    count
}

/// Extracts the account identifier: the final non-empty path segment of the
/// account location URL, trailing slashes trimmed.
pub fn account_id(location: &str) -> Option<&str> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Produces one fetch target per page index, 1 through `page_count`
/// inclusive. Aggregation is order-independent; the order here only matters
/// for fetch scheduling.
pub fn page_urls(base_url: &str, account_id: &str, page_count: u32) -> Vec<String> {
    (1..=page_count)
        .map(|page| {
            format!(
                "{}/paging.html?pt={}&p={}&ts={}&l=x&id={}",
                base_url,
                PAGE_SIZE,
                page,
                TIME_SPAN_ALL,
                urlencoding::encode(account_id)
            )
        })
        .collect()
}
