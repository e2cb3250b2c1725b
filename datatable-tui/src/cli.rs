//! Command-line options.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use datatable_lib::{SortToggle, TableConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortToggleArg {
    /// Repeat sort reverses the current order
    Reverse,
    /// Repeat sort flips between ascending and descending
    Descending,
}

impl From<SortToggleArg> for SortToggle {
    fn from(arg: SortToggleArg) -> Self {
        match arg {
            SortToggleArg::Reverse => SortToggle::Reverse,
            SortToggleArg::Descending => SortToggle::Descending,
        }
    }
}

/// Browse a contact table in the terminal.
#[derive(Debug, Parser)]
#[command(name = "datatable", version)]
pub struct Cli {
    /// JSON file holding an array of records. Defaults to the built-in contacts.
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Records per page
    #[arg(short, long)]
    pub page_size: Option<usize>,

    /// Simulated fetch delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// What a repeated click on the sorted column does
    #[arg(long, value_enum)]
    pub sort_toggle: Option<SortToggleArg>,

    /// Neither read nor write saved preferences
    #[arg(long)]
    pub no_settings: bool,

    /// Forget saved preferences before starting
    #[arg(long, conflicts_with = "no_settings")]
    pub reset_settings: bool,
}

impl Cli {
    /// Layer explicit options over `config`.
    pub fn apply(&self, mut config: TableConfig) -> TableConfig {
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_fetch_delay(Duration::from_millis(ms));
        }
        if let Some(toggle) = self.sort_toggle {
            config = config.with_sort_toggle(toggle.into());
        }
        config
    }
}
