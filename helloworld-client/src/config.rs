//! Client configuration.
//!
//! The RPC endpoint, commitment level and payer keypair come from the Solana
//! CLI configuration file (`~/.config/solana/cli/config.yml` by default), the
//! same file `solana config set` writes.  The program keypair is the one
//! produced when building the program.

use core::str::FromStr;
use std::path::PathBuf;

use solana_cli_config::Config;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::{Error, Result};

/// Location of the program keypair generated by `cargo build-sbf`.
pub const PROGRAM_KEYPAIR_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../dist/program/helloworld-keypair.json"
);


/// Settings used by a client run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub json_rpc_url: String,
    pub commitment: CommitmentConfig,
    pub payer_keypair_path: PathBuf,
    pub program_keypair_path: PathBuf,
}

impl Settings {
    /// Loads settings from the default Solana CLI configuration file.
    pub fn load() -> Result<Self> {
        let path = solana_cli_config::CONFIG_FILE
            .as_ref()
            .ok_or(Error::NoConfigFile)?;
        Self::load_from(path)
    }

    /// Loads settings from given Solana CLI configuration file.
    pub fn load_from(path: &str) -> Result<Self> {
        log::debug!("Reading Solana CLI config from {path}");
        let config = Config::load(path)
            .map_err(|err| Error::Config { path: path.into(), err })?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: Config) -> Self {
        let commitment = CommitmentConfig::from_str(&config.commitment)
            .unwrap_or_else(|_| {
                log::warn!(
                    "Unknown commitment ‘{}’; using confirmed",
                    config.commitment
                );
                CommitmentConfig::confirmed()
            });
        Self {
            json_rpc_url: config.json_rpc_url,
            commitment,
            payer_keypair_path: config.keypair_path.into(),
            program_keypair_path: PROGRAM_KEYPAIR_PATH.into(),
        }
    }
}
