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

use std::fs;

use log::info;
use serde::Deserialize;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use structopt::StructOpt;
use structopt_toml::StructOptToml;
use url::Url;

use qfund::{
    at::{template::GOAL_DECIMALS, AtCreateRequest, CrowdfundParams},
    util::{
        parse::{decode_base10, encode_base10},
        path::{get_config_path, spawn_config},
    },
    Error, Result,
};

mod node;
use node::NodeClient;

const CONFIG_FILE: &str = "fundooor_config.toml";
const CONFIG_FILE_CONTENTS: &str = include_str!("../fundooor_config.toml");

#[derive(Clone, Debug, Deserialize, StructOpt, StructOptToml)]
#[serde(default)]
#[structopt(name = "fundooor", about = "Crowdfund AT deployment tool")]
struct Args {
    #[structopt(short, parse(from_occurrences))]
    /// Increase verbosity (-vvv supported)
    verbose: u8,

    #[structopt(short, long)]
    /// Configuration file to use
    config: Option<String>,

    #[structopt(long, default_value = "http://127.0.0.1:12391")]
    /// Node HTTP API endpoint
    endpoint: Url,

    #[structopt(long, default_value = "2880")]
    /// Lower bound of the accepted crowdfund duration, in blocks
    min_duration_blocks: u64,

    #[structopt(long, default_value = "43200")]
    /// Upper bound of the accepted crowdfund duration, in blocks
    max_duration_blocks: u64,

    #[structopt(long)]
    /// Funding goal, as a decimal token amount
    goal: Option<String>,

    #[structopt(long)]
    /// Crowdfund duration, in blocks
    blocks: Option<u64>,

    #[structopt(long)]
    /// Beneficiary address the raised funds are paid out to
    address: Option<String>,

    #[structopt(long)]
    /// Assemble and print the creation request without submitting it
    dry_run: bool,
}

/// Check a requested duration against the configured window. The window
/// is deployment policy, the encoder itself accepts any duration.
fn check_duration_window(blocks: u64, min: u64, max: u64) -> Result<()> {
    if blocks < min || blocks > max {
        return Err(Error::Custom(format!(
            "Crowdfund duration must be between {min} and {max} blocks, got {blocks}"
        )))
    }

    Ok(())
}

fn main() -> Result<()> {
    // CLI arguments take precedence, the config file fills in the rest.
    let args = Args::from_args();
    let cfg_path = get_config_path(args.config.clone(), CONFIG_FILE)?;
    spawn_config(&cfg_path, CONFIG_FILE_CONTENTS.as_bytes())?;
    let args = Args::from_args_with_toml(&fs::read_to_string(cfg_path)?).unwrap();

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let Some(ref goal) = args.goal else {
        return Err(Error::Custom("Missing funding goal (--goal)".to_string()))
    };
    let Some(blocks) = args.blocks else {
        return Err(Error::Custom("Missing crowdfund duration (--blocks)".to_string()))
    };
    let Some(ref address) = args.address else {
        return Err(Error::Custom("Missing beneficiary address (--address)".to_string()))
    };

    check_duration_window(blocks, args.min_duration_blocks, args.max_duration_blocks)?;

    let goal = decode_base10(goal, GOAL_DECIMALS, true)?;

    let params = CrowdfundParams::new(goal, blocks, address);
    let request = AtCreateRequest::new(params.encode()?);

    info!(
        target: "fundooor",
        "Deploying crowdfund: goal {}, {} blocks, beneficiary {}",
        encode_base10(goal, GOAL_DECIMALS), blocks, address,
    );

    if args.dry_run {
        println!("{}", request.stringify()?);
        return Ok(())
    }

    let node = NodeClient::new(args.endpoint);
    let creation_bytes = smol::block_on(node.at_create(&request))?;

    info!(target: "fundooor", "Node accepted the creation request");
    println!("{creation_bytes}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_window() {
        assert!(check_duration_window(2880, 2880, 43200).is_ok());
        assert!(check_duration_window(43200, 2880, 43200).is_ok());
        assert!(check_duration_window(10000, 2880, 43200).is_ok());

        assert!(check_duration_window(0, 2880, 43200).is_err());
        assert!(check_duration_window(2879, 2880, 43200).is_err());
        assert!(check_duration_window(43201, 2880, 43200).is_err());
    }
}
