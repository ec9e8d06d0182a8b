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

/// Automated Transaction (AT) deployment payloads
pub mod at;

/// Error library
pub mod error;

/// Utility library
pub mod util;

pub use error::{Error, Result};
