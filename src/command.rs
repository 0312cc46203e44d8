//! Chat command handlers.
//!
//! Handlers return a status code (`1` accepted, `0` rejected) plus the lines
//! to show, following the usual command-framework contract.

use crate::config::ConfigStore;
use crate::error::TrackerError;
use crate::query::{paginate, present, ListArgument, ListRow, MapLinkBuilder, Page};
use crate::store::RecordStore;
use crate::types::Observer;
use tracing::debug;

/// Command name the list is registered under.
pub const LIST_COMMAND: &str = "/shulker";

pub const SUCCESS: i32 = 1;
pub const FAILURE: i32 = 0;

/// Result of running a command.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandOutcome {
    pub status: i32,

    /// Plain-text lines, in display order.
    pub lines: Vec<String>,

    /// Structured page for UIs that render rows themselves.
    pub view: Option<ListView>,
}

impl CommandOutcome {
    pub fn success(line: impl Into<String>) -> Self {
        Self {
            status: SUCCESS,
            lines: vec![line.into()],
            view: None,
        }
    }

    pub fn failure(line: impl Into<String>) -> Self {
        Self {
            status: FAILURE,
            lines: vec![line.into()],
            view: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status != FAILURE
    }
}

/// A rendered page of the list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListView {
    pub page: Page<ListRow>,

    /// Command that opens the previous page.
    pub prev_command: Option<String>,

    /// Command that opens the next page.
    pub next_command: Option<String>,
}

impl ListView {
    fn new(page: Page<ListRow>) -> Self {
        let prev_command = page
            .has_prev()
            .then(|| format!("{} {}", LIST_COMMAND, page.number - 1));
        let next_command = page
            .has_next()
            .then(|| format!("{} {}", LIST_COMMAND, page.number + 1));
        Self {
            page,
            prev_command,
            next_command,
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "=== Shulker Box Tracker ===".to_string(),
            format!(
                "Page {} of {} ({} total)",
                self.page.number, self.page.total_pages, self.page.total
            ),
        ];
        lines.extend(self.page.items.iter().map(ListRow::to_string));

        let nav: Vec<&str> = [
            self.prev_command.as_ref().map(|_| "[← Prev]"),
            self.next_command.as_ref().map(|_| "[Next →]"),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !nav.is_empty() {
            lines.push(String::new());
            lines.push(nav.join(" "));
        }
        lines
    }
}

/// `/shulker [page|reset|resetall]`. A missing argument shows page 1.
pub fn list_command(
    records: &RecordStore,
    config: &ConfigStore,
    observer: &Observer,
    arg: Option<&str>,
) -> CommandOutcome {
    let all = records.list();
    if all.is_empty() {
        return CommandOutcome::success("No shulker boxes tracked yet!");
    }

    let number = match ListArgument::parse(arg.unwrap_or("1")) {
        Ok(ListArgument::Page(number)) => number,
        Ok(ListArgument::Reset { all }) => {
            // The reset stays applied in memory even if the file could not be rewritten.
            if let Err(e) = records.reset(all) {
                debug!(all, error = %e, "reset not persisted");
            }
            return CommandOutcome::success(if all {
                "All shulker boxes have been reset."
            } else {
                "Default shulker boxes have been reset."
            });
        }
        Err(_) => {
            return CommandOutcome::failure(
                "Invalid page number! Please enter a valid integer or type 'reset' to reset \
                 your shulker history.",
            )
        }
    };

    let page = match paginate(&all, number) {
        Ok(page) => page,
        Err(TrackerError::InvalidPage { total_pages: 1, .. }) => {
            return CommandOutcome::failure("Invalid page number! There is only one page.")
        }
        Err(TrackerError::InvalidPage { total_pages, .. }) => {
            return CommandOutcome::failure(format!(
                "Invalid page number! Valid pages: 1-{}",
                total_pages
            ))
        }
        Err(e) => return CommandOutcome::failure(e.to_string()),
    };

    let map = MapLinkBuilder::from_config(config);
    let rows = present(&page.items, page.start_index, observer, map.as_ref());
    let view = ListView::new(Page {
        number: page.number,
        total_pages: page.total_pages,
        total: page.total,
        start_index: page.start_index,
        items: rows,
    });

    CommandOutcome {
        status: SUCCESS,
        lines: view.lines(),
        view: Some(view),
    }
}

/// `/shulkerconfig list | get <key> | set <key> <value>`.
pub fn config_command(config: &ConfigStore, args: &[&str]) -> CommandOutcome {
    match args {
        [] | ["list"] => {
            let all = config.get_all();
            if all.is_empty() {
                return CommandOutcome::success("No config values set.");
            }
            CommandOutcome {
                status: SUCCESS,
                lines: all.iter().map(|(k, v)| format!("{} = {}", k, v)).collect(),
                view: None,
            }
        }
        ["get", key] => match config.try_get(key) {
            Some(value) => CommandOutcome::success(format!("{} = {}", key, value)),
            None => CommandOutcome::failure(
                TrackerError::ConfigKeyNotFound(key.to_string()).to_string(),
            ),
        },
        ["set", key, value @ ..] if !value.is_empty() => {
            let value = value.join(" ");
            if config.set(key, &value) {
                CommandOutcome::success(format!("Set {} to {}", key, value))
            } else {
                CommandOutcome::failure(format!("Failed to save {}", key))
            }
        }
        _ => CommandOutcome::failure("Usage: list | get <key> | set <key> <value>"),
    }
}
