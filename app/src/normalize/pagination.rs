use serde::Serialize;

/// Pages always shown next to the first page when the current page is near it.
const LEADING_PAGES: i64 = 3;

/// One entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageItem {
    Page { value: u32 },
    Ellipsis,
}

/// Everything a pagination control needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub max: u32,
    pub previous: Option<u32>,
    pub next: Option<u32>,
    pub items: Vec<PageItem>,
}

impl Pagination {
    pub fn new(page: u32, max: u32) -> Self {
        let max = max.max(1);
        Self {
            page,
            max,
            previous: (page > 1).then(|| page - 1),
            next: (page < max).then(|| page + 1),
            items: page_window(page, max),
        }
    }
}

/// Page buttons to show for `page` out of `max` pages.
///
/// The first and last page are always present. Near the start the first
/// three pages are shown, near the end the last three, and otherwise the
/// current page with one neighbour on each side. An ellipsis marks every gap
/// wider than one page number. When there are fewer than six pages every page
/// is listed.
pub fn page_window(page: u32, max: u32) -> Vec<PageItem> {
    let page = i64::from(page);
    let last = i64::from(max.max(1));
    let trailing_start = i64::from(max) - LEADING_PAGES;

    let mut shown = vec![1, last];

    if LEADING_PAGES > trailing_start {
        shown.extend(2..last);
    } else if page < LEADING_PAGES {
        shown.extend(2..=LEADING_PAGES.min(last));
    } else if page > trailing_start {
        shown.extend(trailing_start.max(2)..last);
    } else {
        shown.extend((page - 1).max(2)..=(page + 1).min(last));
    }

    shown.sort_unstable();
    shown.dedup();

    let mut items = Vec::with_capacity(shown.len() + 2);
    let mut previous = 0;
    for value in shown {
        if value - previous > 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            value: value as u32,
        });
        previous = value;
    }

    items
}
