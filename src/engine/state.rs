//! Dashboard view state and the actions that change it
//!
//! Reset rules:
//! - selecting an account resets the month and year filters to "All";
//! - selecting a month leaves the year alone, and selecting a year leaves the
//!   month alone;
//! - any filter change, a new sort column or a new page size returns to page 1;
//! - page navigation outside `1..=total_pages` does nothing.

use crate::models::AccountId;

use super::filter::{FilterState, MonthFilter, YearFilter};
use super::paginate::PageSize;
use super::sort::{SortColumn, SortState};

/// Current page and rows per page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

/// A user interaction with the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SelectAccount(Option<AccountId>),
    SelectMonth(MonthFilter),
    SelectYear(YearFilter),
    /// A click on a column header
    SortBy(SortColumn),
    SetPageSize(PageSize),
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    GoToPage(usize),
}

/// Everything the dashboard needs besides the entries themselves
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub filter: FilterState,
    pub sort: SortState,
    pub page: PageState,
}

impl DashboardState {
    /// Start from a filter, default sort and page size
    pub fn new(filter: FilterState, page_size: PageSize) -> Self {
        Self {
            filter,
            sort: SortState::default(),
            page: PageState {
                page: 1,
                page_size,
            },
        }
    }

    /// Apply an action
    ///
    /// `total_pages` is the page count for the current filters; it bounds the
    /// navigation actions. Returns whether the state changed.
    pub fn apply(&mut self, action: ViewAction, total_pages: usize) -> bool {
        let before = self.clone();

        match action {
            ViewAction::SelectAccount(account) => {
                self.filter = FilterState::for_account(account);
                self.page.page = 1;
            }
            ViewAction::SelectMonth(month) => {
                self.filter.month = month;
                self.page.page = 1;
            }
            ViewAction::SelectYear(year) => {
                self.filter.year = year;
                self.page.page = 1;
            }
            ViewAction::SortBy(column) => {
                if self.sort.click(column) {
                    self.page.page = 1;
                }
            }
            ViewAction::SetPageSize(size) => {
                self.page.page_size = size;
                self.page.page = 1;
            }
            ViewAction::NextPage => {
                if self.page.page < total_pages {
                    self.page.page += 1;
                }
            }
            ViewAction::PrevPage => {
                if self.page.page > 1 {
                    self.page.page -= 1;
                }
            }
            ViewAction::FirstPage => self.page.page = 1,
            ViewAction::LastPage => self.page.page = total_pages.max(1),
            ViewAction::GoToPage(page) => {
                if (1..=total_pages).contains(&page) {
                    self.page.page = page;
                }
            }
        }

        *self != before
    }
}
