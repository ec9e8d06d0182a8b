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

use crate::{Error, Result};

/// Decode a base10 amount string like "12.34" into an integer of the
/// smallest denomination, given the number of decimal places the token
/// uses. With `strict` set, amounts carrying more precision than
/// `decimal_places` are rejected, otherwise the excess is rounded up
/// when nonzero.
pub fn decode_base10(amount: &str, decimal_places: usize, strict: bool) -> Result<u64> {
    let mut s = amount.to_string();

    // Remove the decimal point, keeping its position
    let point = match s.find('.') {
        Some(p) => {
            s.remove(p);
            p
        }
        None => s.len(),
    };

    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::ParseFailed("Found non-digit characters"))
    }

    let fract_places = s.len() - point;
    let mut round_up = false;

    if fract_places < decimal_places {
        s.push_str(&"0".repeat(decimal_places - fract_places));
    } else if fract_places > decimal_places {
        let end = point + decimal_places;
        round_up = s[end..].bytes().any(|b| b != b'0');
        if strict && round_up {
            return Err(Error::ParseFailed("Too many decimal places"))
        }
        s.truncate(end);
    }

    let number = s.parse::<u64>()?;

    if round_up {
        return number.checked_add(1).ok_or(Error::OffsetOverflow)
    }

    Ok(number)
}

/// Encode an integer amount of the smallest denomination into a base10
/// string with the given number of decimal places. Trailing zeroes of
/// the fractional part are stripped.
pub fn encode_base10(amount: u64, decimal_places: usize) -> String {
    let mut s = format!("{:0>width$}", amount, width = decimal_places + 1);
    s.insert(s.len() - decimal_places, '.');
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Re-express any integer as an unsigned byte. The AT wire format stores
/// bytes as signed 8-bit values, so bytes crossing that boundary may
/// arrive already wrapped modulo 256. Idempotent: values in [0, 255] map
/// to themselves.
pub fn normalize_byte(b: i64) -> u8 {
    (((b % 256) + 256) % 256) as u8
}
