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

use std::collections::HashMap;

use tinyjson::JsonValue;

use crate::{
    at::template::{CIYAM_AT_VERSION, CODE_BYTES_BASE64},
    Result,
};

/// Deployment request accepted by a node's `/at/create` endpoint.
/// The node answers with the creation bytes used in the subsequent
/// deployment transaction; assembling and signing that transaction is
/// the wallet's job, not ours.
#[derive(Clone, Debug)]
pub struct AtCreateRequest {
    /// CIYAM AT version the bytecode targets
    pub ciyam_at_version: u8,
    /// Code-byte segment, base64-encoded
    pub code_bytes_base64: String,
    /// Data segment, base64-encoded
    pub data_bytes_base64: String,
    /// Call stack pages to reserve
    pub num_call_stack_pages: u16,
    /// User stack pages to reserve
    pub num_user_stack_pages: u16,
    /// Minimum amount needed to activate the AT, in atomic units
    pub min_activation_amount: u64,
}

impl AtCreateRequest {
    /// Create a crowdfund deployment request wrapping the given
    /// base64-encoded data segment. The code bytes and the remaining
    /// fields are fixed for the crowdfund bytecode.
    pub fn new(data_bytes_base64: String) -> Self {
        Self {
            ciyam_at_version: CIYAM_AT_VERSION,
            code_bytes_base64: CODE_BYTES_BASE64.to_string(),
            data_bytes_base64,
            num_call_stack_pages: 0,
            num_user_stack_pages: 0,
            min_activation_amount: 0,
        }
    }

    /// Serialize the request into its JSON wire form.
    pub fn stringify(&self) -> Result<String> {
        let mut body: HashMap<String, JsonValue> = HashMap::new();
        body.insert("ciyamAtVersion".to_string(), (self.ciyam_at_version as f64).into());
        body.insert("codeBytesBase64".to_string(), self.code_bytes_base64.clone().into());
        body.insert("dataBytesBase64".to_string(), self.data_bytes_base64.clone().into());
        body.insert("numCallStackPages".to_string(), (self.num_call_stack_pages as f64).into());
        body.insert("numUserStackPages".to_string(), (self.num_user_stack_pages as f64).into());
        body.insert("minActivationAmount".to_string(), (self.min_activation_amount as f64).into());

        Ok(JsonValue::from(body).stringify()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_form() {
        let request = AtCreateRequest::new("AAEC".to_string());
        let json: JsonValue = request.stringify().unwrap().parse().unwrap();

        let body: &HashMap<String, JsonValue> = json.get().unwrap();
        assert_eq!(*body["ciyamAtVersion"].get::<f64>().unwrap(), 2.0);
        assert_eq!(body["codeBytesBase64"].get::<String>().unwrap(), CODE_BYTES_BASE64);
        assert_eq!(body["dataBytesBase64"].get::<String>().unwrap(), "AAEC");
        assert_eq!(*body["numCallStackPages"].get::<f64>().unwrap(), 0.0);
        assert_eq!(*body["numUserStackPages"].get::<f64>().unwrap(), 0.0);
        assert_eq!(*body["minActivationAmount"].get::<f64>().unwrap(), 0.0);
    }
}
