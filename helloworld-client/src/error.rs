use solana_client::client_error::ClientError;
use solana_sdk::pubkey::{Pubkey, PubkeyError};

use crate::keypair::KeypairError;

pub type Result<T = (), E = Error> = core::result::Result<T, E>;


/// Error which terminates the client.
///
/// None of the errors are retried.  All of them are reported to the user and
/// the process exits with a failure status.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum Error {
    #[display("unable to determine Solana CLI config file location")]
    #[from(ignore)]
    NoConfigFile,

    #[display("failed to read Solana CLI config at ‘{path}’: {err}")]
    #[from(ignore)]
    Config { path: String, err: std::io::Error },

    #[display(
        "failed to read program keypair at ‘{path}’: {err}; program may need \
         to be built and deployed with `solana program deploy \
         dist/program/helloworld.so`"
    )]
    #[from(ignore)]
    ProgramKeypair { path: String, err: KeypairError },

    #[display("failed to read payer keypair at ‘{path}’: {err}")]
    #[from(ignore)]
    PayerKeypair { path: String, err: KeypairError },

    #[display(
        "program {program_id} needs to be deployed with `solana program \
         deploy dist/program/helloworld.so`"
    )]
    #[from(ignore)]
    ProgramNotDeployed { program_id: Pubkey },

    #[display("program {program_id} is not executable")]
    #[from(ignore)]
    ProgramNotExecutable { program_id: Pubkey },

    #[display("greeted account {address} does not exist")]
    #[from(ignore)]
    NoGreetedAccount { address: Pubkey },

    #[display("malformed greeting account: {_0}")]
    #[from(ignore)]
    Greeting(borsh::io::Error),

    Seed(PubkeyError),
    Client(ClientError),
    Msg(&'static str),
}
