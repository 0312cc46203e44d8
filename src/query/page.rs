//! Pagination and list argument parsing.

use crate::error::{Result, TrackerError};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 8;

/// Words that turn the list argument into a reset request.
const RESET_PREFIXES: [&str; 3] = ["reset", "prune", "clear"];

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// One page of a larger list.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// 1-based page number.
    pub number: usize,
    pub total_pages: usize,
    /// Item count across all pages.
    pub total: usize,
    /// Index of the first item within the full list.
    pub start_index: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice out page `number` (1-based).
pub fn paginate<T: Clone>(items: &[T], number: i64) -> Result<Page<T>> {
    let total_pages = total_pages(items.len());
    if number < 1 || number as u64 > total_pages as u64 {
        return Err(TrackerError::InvalidPage {
            page: number,
            total_pages,
        });
    }

    let number = number as usize;
    let start_index = (number - 1) * PAGE_SIZE;
    let end_index = (start_index + PAGE_SIZE).min(items.len());
    Ok(Page {
        number,
        total_pages,
        total: items.len(),
        start_index,
        items: items[start_index..end_index].to_vec(),
    })
}

/// Parsed argument of the list command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListArgument {
    Page(i64),
    /// `all` clears every record, otherwise only undyed ones.
    Reset { all: bool },
}

impl ListArgument {
    /// Integers select a page; `reset`/`prune`/`clear` prefixes (any case)
    /// request a reset, a full one if the word also ends in `all`.
    pub fn parse(arg: &str) -> Result<Self> {
        if let Ok(page) = arg.parse::<i32>() {
            return Ok(ListArgument::Page(i64::from(page)));
        }

        let lower = arg.to_lowercase();
        if RESET_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
            return Ok(ListArgument::Reset {
                all: lower.ends_with("all"),
            });
        }

        Err(TrackerError::InvalidArgument(arg.to_string()))
    }
}
