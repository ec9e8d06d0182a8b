/* This file is part of qfund (https://codeberg.org/qfund/qfund)
 *
 * Copyright (C) 2024-2026 qfund developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/// Main result type used throughout the codebase.
pub type Result<T> = std::result::Result<T, Error>;

/// General library errors used throughout the codebase.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    // ==============
    // Parsing errors
    // ==============
    #[error("Parse failed: {0}")]
    ParseFailed(&'static str),

    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),

    // ==============
    // Address errors
    // ==============
    #[error("Invalid address encoding: {0}")]
    InvalidAddressEncoding(#[from] bs58::decode::Error),

    #[error("Invalid address length: decoded to {0} bytes")]
    InvalidAddressLength(usize),

    // ==============
    // Numeric errors
    // ==============
    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(&'static str),

    #[error("Scaled value exceeds 64-bit capacity")]
    OffsetOverflow,

    // ===============
    // Encoding errors
    // ===============
    #[error("JSON generation error: {0}")]
    JsonError(String),

    // ===================
    // Node-related errors
    // ===================
    #[error("Node request failed: {0}")]
    NodeRequestFailed(String),

    // ====================
    // Miscellaneous errors
    // ====================
    #[error("IO error: {0}")]
    Io(std::io::ErrorKind),

    #[error("SetLogger (log crate) failed: {0}")]
    SetLoggerError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.kind())
    }
}

impl From<tinyjson::JsonGenerateError> for Error {
    fn from(err: tinyjson::JsonGenerateError) -> Self {
        Self::JsonError(err.message().to_string())
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Self::SetLoggerError(err.to_string())
    }
}
