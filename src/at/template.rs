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

/// Size of the crowdfund AT data segment in bytes
pub const DATA_SEGMENT_SIZE: usize = 112;

/// Offset of the contract duration field (u64, big-endian)
pub const DURATION_OFFSET: usize = 0;

/// Offset of the funding goal field (u64, big-endian, atomic units)
pub const GOAL_OFFSET: usize = 8;

/// Offset of the beneficiary address field
pub const ADDRESS_OFFSET: usize = 80;

/// Size of a raw decoded address: one version byte, a 20-byte public
/// key hash and a 4-byte checksum
pub const RAW_ADDRESS_SIZE: usize = 25;

/// Decimal places of the token's atomic unit (1 token = 10^8 atomic units)
pub const GOAL_DECIMALS: usize = 8;

/// CIYAM AT version the crowdfund bytecode targets
pub const CIYAM_AT_VERSION: u8 = 2;

/// Pre-assembled crowdfund data segment. The duration, goal and
/// beneficiary fields hold placeholder values and are overwritten on
/// every encode; all other bytes are part of the contract's initial
/// state and must reach the chain untouched.
pub const DATA_SEGMENT_TEMPLATE: [u8; DATA_SEGMENT_SIZE] = [
    0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 0, 119, 53, 148, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 58, 113, 133, 176, 21, 218, 49,
    246, 3, 92, 116, 197, 133, 191, 37, 170, 130, 45, 181, 38, 29, 0, 98, 12, 12, 0, 0, 0, 0, 0,
    0, 0,
];

/// Fixed crowdfund AT bytecode, base64-encoded. Submitted verbatim as
/// the code-byte segment of the creation request; never constructed or
/// validated here.
pub const CODE_BYTES_BASE64: &str =
    "NQMBAAAABTUDAAAAAAI3BAYAAAACAAAAAgAAAAACAAAAAwAAAAJLAAAAAwAAAAAAAAAgJQAAAAM1BAAAAAAEIAAAAAQA\
     AAABGTgBHwAAAAAAAAAKMgQDKDAzAwQAAAAFNQElAAAABhsAAAAGByg1AwcAAAAFIAAAAAUAAAACCyg1AwUAAAAHJAAA\
     AAcAAAAI0jUDBgAAAAkyAwozBAIAAAAJGgAAAFk=";
