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

use qfund::{
    at::{template::DATA_SEGMENT_SIZE, CrowdfundParams},
    util::encoding::base64,
    Error,
};

// 100 QORT goal over 15 blocks, paid out to the address embedded in the
// template (`QWxEcmZxnM8yb1p92C1YKKRsp8svSVbFEs`). Computed once with an
// independent implementation.
const REFERENCE_SEGMENT: [u8; DATA_SEGMENT_SIZE] = [
    0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 2, 84, 11, 228, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 58, 113, 133, 176, 21, 218, 49,
    246, 3, 92, 116, 197, 133, 191, 37, 170, 130, 45, 181, 38, 29, 0, 98, 12, 12, 0, 0, 0, 0, 0,
    0, 0,
];

const REFERENCE_BASE64: &str =
    "AAAAAAAAAA8AAAACVAvkAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\
     AAAAAAAAAAAAAA6cYWwFdox9gNcdMWFvyWqgi21Jh0AYgwMAAAAAAAAAA==";

#[test]
fn golden_deployment() {
    let params = CrowdfundParams::new(
        10_000_000_000, // 100 QORT
        15,
        "QWxEcmZxnM8yb1p92C1YKKRsp8svSVbFEs",
    );

    let segment = params.build().unwrap();
    assert_eq!(segment, REFERENCE_SEGMENT);

    let encoded = params.encode().unwrap();
    assert_eq!(encoded, REFERENCE_BASE64);
    assert_eq!(base64::decode(&encoded).unwrap(), REFERENCE_SEGMENT.to_vec());
}

#[test]
fn second_beneficiary() {
    // 2.5 QORT over 2880 blocks to a different 25-byte address
    let params = CrowdfundParams::new(250_000_000, 2880, "QLhKCGi5ZvnS9amYgdA353vzbdbWYie3fL");

    let encoded = params.encode().unwrap();
    assert_eq!(
        encoded,
        "AAAAAAAAC0AAAAAADuaygAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\
         AAAAAAAAAAAAAAAAAA6AQIDBAUGBwgJCgsMDQ4PEBESExTerb7vAAAAAAAAAA=="
    );

    let segment = base64::decode(&encoded).unwrap();
    assert_eq!(segment.len(), DATA_SEGMENT_SIZE);
    assert_eq!(
        segment[80..105],
        [
            58, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 0xde,
            0xad, 0xbe, 0xef
        ]
    );
}

#[test]
fn encode_is_deterministic() {
    let params = CrowdfundParams::new(1, 1, "QWxEcmZxnM8yb1p92C1YKKRsp8svSVbFEs");

    let first = params.encode().unwrap();
    let second = params.encode().unwrap();
    assert_eq!(first, second);

    // Separate instances with the same inputs agree as well
    let other = CrowdfundParams::new(1, 1, "QWxEcmZxnM8yb1p92C1YKKRsp8svSVbFEs");
    assert_eq!(other.encode().unwrap(), first);
}

#[test]
fn failures_are_hard() {
    // Malformed base58: 'I' and '0' are excluded from the alphabet
    let params = CrowdfundParams::new(1, 2880, "QI0I0I0I0I0I0I0I0I0I0I0I0I0I0I0I0I");
    assert!(matches!(params.build(), Err(Error::InvalidAddressEncoding(_))));

    // Wrong decoded length is neither truncated nor padded
    let params = CrowdfundParams::new(1, 2880, "Ldp");
    assert!(matches!(params.build(), Err(Error::InvalidAddressLength(3))));

    // Zero goal fails before anything is assembled
    let params = CrowdfundParams::new(0, 2880, "QWxEcmZxnM8yb1p92C1YKKRsp8svSVbFEs");
    assert!(matches!(params.build(), Err(Error::InvalidNumericInput(_))));
}

#[test]
fn duration_field_roundtrip() {
    for blocks in [0_u64, 1, 29, 2880, 43200, 65536, u32::MAX as u64] {
        let params = CrowdfundParams::new(1, blocks, "QWxEcmZxnM8yb1p92C1YKKRsp8svSVbFEs");
        let segment = params.build().unwrap();
        let field = u64::from_be_bytes(segment[0..8].try_into().unwrap());
        assert_eq!(field, blocks);
    }
}
