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

use log::debug;

use crate::{
    at::template::{
        ADDRESS_OFFSET, DATA_SEGMENT_SIZE, DATA_SEGMENT_TEMPLATE, DURATION_OFFSET, GOAL_OFFSET,
        RAW_ADDRESS_SIZE,
    },
    util::{encoding::base64, parse::normalize_byte},
    Error, Result,
};

/// A fully assembled crowdfund AT data segment
pub type DataSegment = [u8; DATA_SEGMENT_SIZE];

/// Parameters for a crowdfund AT deployment. `build` assembles the
/// data segment submitted to the chain alongside the fixed bytecode.
///
/// The funding goal is given in atomic token units, the duration in
/// blocks. Enforcing a sensible duration window is the caller's
/// business policy; here only structural validity is checked.
#[derive(Clone, Debug)]
pub struct CrowdfundParams {
    /// Funding goal, in atomic token units
    pub goal: u64,
    /// Contract duration, in blocks
    pub duration_blocks: u64,
    /// Beneficiary address, base58-encoded
    pub beneficiary: String,
}

impl CrowdfundParams {
    pub fn new(goal: u64, duration_blocks: u64, beneficiary: &str) -> Self {
        Self { goal, duration_blocks, beneficiary: beneficiary.to_string() }
    }

    /// Assemble the data segment: copy the template, write the duration
    /// and goal fields as big-endian u64, and overwrite the beneficiary
    /// field with the decoded address bytes. All inputs are validated
    /// before any buffer is produced, so a failing call leaves nothing
    /// half-written.
    pub fn build(&self) -> Result<DataSegment> {
        if self.goal == 0 {
            return Err(Error::InvalidNumericInput("Funding goal must be greater than zero"))
        }

        let raw_addr = bs58::decode(&self.beneficiary).into_vec()?;
        if raw_addr.len() != RAW_ADDRESS_SIZE {
            return Err(Error::InvalidAddressLength(raw_addr.len()))
        }

        let mut segment = DATA_SEGMENT_TEMPLATE;
        put_u64_be(&mut segment, DURATION_OFFSET, self.duration_blocks);
        put_u64_be(&mut segment, GOAL_OFFSET, self.goal);

        // Decoded address bytes may come out of a signed-byte domain,
        // renormalize them uniformly at this boundary.
        for (i, &b) in raw_addr.iter().enumerate() {
            segment[ADDRESS_OFFSET + i] = normalize_byte(b as i64);
        }

        debug!(
            target: "at::encoder",
            "Assembled crowdfund data segment: goal {} atomic units, {} blocks",
            self.goal, self.duration_blocks,
        );

        Ok(segment)
    }

    /// Assemble and base64-encode the data segment for transport.
    pub fn encode(&self) -> Result<String> {
        Ok(base64::encode(&self.build()?))
    }
}

/// Write a u64 into `buf` at the given offset, big-endian. The write is
/// split into two 32-bit words, matching the AT machine's word size.
fn put_u64_be(buf: &mut [u8], offset: usize, value: u64) {
    let high = (value / 0x1_0000_0000) as u32;
    let low = (value % 0x1_0000_0000) as u32;

    buf[offset..offset + 4].copy_from_slice(&high.to_be_bytes());
    buf[offset + 4..offset + 8].copy_from_slice(&low.to_be_bytes());
}

/// Encode a deployment data segment from a decimal goal amount, scaling
/// it into atomic units with rounding. Rejects non-finite and
/// non-positive amounts, and amounts whose scaled value exceeds u64
/// capacity.
pub fn encode_data_segment(
    goal_amount: f64,
    duration_blocks: u64,
    address: &str,
) -> Result<String> {
    if !goal_amount.is_finite() || goal_amount <= 0.0 {
        return Err(Error::InvalidNumericInput("Goal amount must be finite and greater than zero"))
    }

    let scaled = (goal_amount * 1e8).round();
    if scaled > u64::MAX as f64 {
        return Err(Error::OffsetOverflow)
    }

    CrowdfundParams::new(scaled as u64, duration_blocks, address).encode()
}
