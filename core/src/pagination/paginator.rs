use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::window::{compute_window, WindowResult, DEFAULT_RADIUS};
use super::PaginationError;

pub const DEFAULT_PAGE_SIZE: u64 = 2;

/// Number of pages needed for `total_items`, never less than one.
pub fn total_pages(total_items: u64, page_size: u64) -> Result<u64, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::InvalidArgument(
            "page size must be at least 1".to_string(),
        ));
    }
    Ok(total_items.div_ceil(page_size).max(1))
}

/// A page number as requested by a client, before it is checked against the
/// real page count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageRequest(u64);

impl PageRequest {
    pub fn new(page: u64) -> Self {
        Self(page.max(1))
    }

    /// Absent, non-numeric, zero and negative values all mean page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);
        Self(page as u64)
    }

    pub fn number(&self) -> u64 {
        self.0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self(1)
    }
}

/// What to do with a request for a page past the last one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OutOfRange {
    /// Serve the last page instead.
    Last,
    #[default]
    NotFound,
}

/// A requested page resolved against the item count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageSlot {
    pub number: u64,
    pub total_pages: u64,
    pub offset: u64,
    pub limit: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub is_paginated: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub window: Option<WindowResult>,
}

impl<T> Page<T> {
    pub fn links(&self, base_path: &str) -> PageLinks {
        PageLinks::new(base_path, self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Paginator {
    pub page_size: u64,
    pub radius: u64,
    pub out_of_range: OutOfRange,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            radius: DEFAULT_RADIUS,
            out_of_range: OutOfRange::default(),
        }
    }
}

impl Paginator {
    pub fn new(page_size: u64, radius: u64, out_of_range: OutOfRange) -> Self {
        Self {
            page_size,
            radius,
            out_of_range,
        }
    }

    pub fn resolve(
        &self,
        request: PageRequest,
        total_items: u64,
    ) -> Result<PageSlot, PaginationError> {
        let total_pages = total_pages(total_items, self.page_size)?;
        let number = match request.number() {
            n if n <= total_pages => n,
            n => match self.out_of_range {
                OutOfRange::Last => {
                    log::debug!("page {} past the last page, serving {}", n, total_pages);
                    total_pages
                }
                OutOfRange::NotFound => {
                    return Err(PaginationError::OutOfRange {
                        page: n,
                        total_pages,
                    })
                }
            },
        };
        Ok(PageSlot {
            number,
            total_pages,
            offset: (number - 1) * self.page_size,
            limit: self.page_size,
        })
    }

    pub fn page<T>(
        &self,
        items: Vec<T>,
        slot: PageSlot,
        total_items: u64,
    ) -> Result<Page<T>, PaginationError> {
        let is_paginated = slot.total_pages > 1;
        let window = if is_paginated {
            Some(compute_window(slot.number, slot.total_pages, self.radius)?)
        } else {
            None
        };
        Ok(Page {
            items,
            number: slot.number,
            total_pages: slot.total_pages,
            total_items,
            is_paginated,
            has_previous: slot.number > 1,
            has_next: slot.number < slot.total_pages,
            window,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: u64,
    pub url: String,
    pub current: bool,
}

/// Navigation links for every page the window mentions, with the ellipsis
/// positions kept alongside.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub first: Option<PageLink>,
    pub left_ellipsis: bool,
    pub pages: Vec<PageLink>,
    pub right_ellipsis: bool,
    pub last: Option<PageLink>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

pub fn page_url(base_path: &str, page: u64) -> String {
    let sep = if base_path.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", base_path, sep, page)
}

impl PageLinks {
    fn new<T>(base_path: &str, page: &Page<T>) -> Self {
        let window = match &page.window {
            Some(w) => w,
            None => return Self::default(),
        };
        let link = |number: u64| PageLink {
            number,
            url: page_url(base_path, number),
            current: number == page.number,
        };

        let pages = window
            .left
            .iter()
            .copied()
            .chain(std::iter::once(page.number))
            .chain(window.right.iter().copied())
            .map(link)
            .collect();

        Self {
            first: window.show_first.then(|| link(1)),
            left_ellipsis: window.left_ellipsis,
            pages,
            right_ellipsis: window.right_ellipsis,
            last: window.show_last.then(|| link(page.total_pages)),
            previous: page
                .has_previous
                .then(|| page_url(base_path, page.number - 1)),
            next: page.has_next.then(|| page_url(base_path, page.number + 1)),
        }
    }
}
