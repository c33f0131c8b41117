//! Reading keypair files.
//!
//! Keypair files are the ones `solana-keygen` produces: a JSON array of 64
//! bytes holding the ed25519 secret key followed by the public key.
//!
//! The files are parsed here rather than with
//! [`solana_sdk::signer::keypair::read_keypair_file`] since that only returns
//! a `Box<dyn Error>` and the cause of a failure would be lost.

use std::path::Path;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signer;
use solana_sdk::signer::keypair::Keypair;

use crate::config::Settings;
use crate::Error;

/// Length of the byte array stored in a keypair file.
pub const KEYPAIR_LENGTH: usize = 64;


/// Reason a keypair file couldn’t be loaded.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum KeypairError {
    Io(std::io::Error),
    Json(serde_json::Error),
    #[display("expected 64 bytes but got {_0}")]
    #[from(ignore)]
    Length(usize),
    #[display("invalid keypair: {_0}")]
    #[from(ignore)]
    Invalid(String),
}


/// Reads keypair from given file.
pub fn read_keypair(path: impl AsRef<Path>) -> Result<Keypair, KeypairError> {
    let json = std::fs::read_to_string(path)?;
    parse_keypair(&json)
}

/// Parses keypair from the JSON representation used in keypair files.
pub fn parse_keypair(json: &str) -> Result<Keypair, KeypairError> {
    let bytes: Vec<u8> = serde_json::from_str(json)?;
    if bytes.len() != KEYPAIR_LENGTH {
        return Err(KeypairError::Length(bytes.len()));
    }
    Keypair::try_from(bytes.as_slice())
        .map_err(|err| KeypairError::Invalid(err.to_string()))
}


/// Loads payer keypair and program id from files named in `settings`.
///
/// Only the public key of the program keypair is used.
pub fn load_keypairs(settings: &Settings) -> crate::Result<(Keypair, Pubkey)> {
    let path = &settings.payer_keypair_path;
    let payer = read_keypair(path).map_err(|err| Error::PayerKeypair {
        path: path.display().to_string(),
        err,
    })?;

    let path = &settings.program_keypair_path;
    let program = read_keypair(path).map_err(|err| Error::ProgramKeypair {
        path: path.display().to_string(),
        err,
    })?;

    Ok((payer, program.pubkey()))
}
