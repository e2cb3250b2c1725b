//! Application error type.

use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Data(#[from] datatable_lib::Error),
}
