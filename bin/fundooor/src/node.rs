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

use log::{debug, error};
use url::Url;

use qfund::{at::AtCreateRequest, Error, Result};

/// HTTP client for the node API endpoints involved in AT deployment
pub struct NodeClient {
    /// Node HTTP API base URL
    endpoint: Url,
}

impl NodeClient {
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }

    /// Submit an AT creation request to the node's `/at/create`
    /// endpoint. The node replies with the base64-encoded creation
    /// bytes for the deployment transaction.
    pub async fn at_create(&self, request: &AtCreateRequest) -> Result<String> {
        let endpoint = format!("{}at/create", self.endpoint);
        let body = request.stringify()?;
        debug!(target: "fundooor::node", "--> {}", body);

        let mut rep = match surf::post(&endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .await
        {
            Ok(v) => v,
            Err(e) => {
                let e = format!("Failed sending AT creation request: {}", e);
                error!(target: "fundooor::node", "{}", e);
                return Err(Error::NodeRequestFailed(e))
            }
        };

        let text = match rep.body_string().await {
            Ok(v) => v,
            Err(e) => {
                let e = format!("Failed reading AT creation response: {}", e);
                error!(target: "fundooor::node", "{}", e);
                return Err(Error::NodeRequestFailed(e))
            }
        };

        if !rep.status().is_success() {
            let e = format!("Node rejected AT creation request: {}", text);
            error!(target: "fundooor::node", "{}", e);
            return Err(Error::NodeRequestFailed(e))
        }

        debug!(target: "fundooor::node", "<-- {}", text);
        Ok(text)
    }
}
