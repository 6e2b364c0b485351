//! Page slicing for the ledger table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Entry;

/// Rows per page; only these four sizes are offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn rows(&self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.rows() == rows)
            .ok_or_else(|| format!("Invalid page size {}. Valid sizes: 10, 25, 50, 100", rows))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.rows()
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid page size '{}'. Valid sizes: 10, 25, 50, 100", s))?;
        Self::try_from(rows)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

/// Number of pages needed for `total_rows`; never less than one
pub fn total_pages(total_rows: usize, page_size: PageSize) -> usize {
    total_rows.div_ceil(page_size.rows()).max(1)
}

/// One page of the sorted table
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub rows: Vec<Entry>,
    /// 1-based page number actually served
    pub page: usize,
    pub page_size: PageSize,
    pub total_pages: usize,
    pub total_rows: usize,
}

impl Page {
    /// 1-based position of the first row on this page (0 when empty)
    pub fn first_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size.rows() + 1
        }
    }

    /// 1-based position of the last row on this page (0 when empty)
    pub fn last_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.first_row() + self.rows.len() - 1
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Clamp a requested page into `1..=total_pages`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice `[(page-1)*size, page*size)` out of the sorted entries
///
/// A page before the first or past the last is clamped, so the call never
/// fails and always reports the page it served.
pub fn paginate(sorted: &[Entry], page: usize, page_size: PageSize) -> Page {
    let total_rows = sorted.len();
    let total_pages = total_pages(total_rows, page_size);
    let page = clamp_page(page, total_pages);

    let start = ((page - 1) * page_size.rows()).min(total_rows);
    let end = (page * page_size.rows()).min(total_rows);

    Page {
        rows: sorted[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_rows,
    }
}
