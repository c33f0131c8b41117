use std::process::ExitCode;

use solana_client::rpc_client::RpcClient;
use solana_sdk::signature::Signer;

use helloworld::config::Settings;
use helloworld::keypair::load_keypairs;
use helloworld::provision::{self, Provisioned};
use helloworld::{network, Result};


/// `usage: helloworld-client`
fn main() -> ExitCode {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}


/// Executes the program.
fn run() -> Result {
    let settings = Settings::load()?;

    let (payer, program_id) = load_keypairs(&settings)?;
    log::info!("Payer: {}", payer.pubkey());

    log::info!("Connecting to {}", settings.json_rpc_url);
    let client = RpcClient::new_with_commitment(
        settings.json_rpc_url,
        settings.commitment,
    );

    let report = provision::run(&client, &payer, &program_id)?;
    if let Provisioned::Created(_, sig) = report.account {
        log::info!("Greeted account created in {sig}");
    }

    if log::log_enabled!(log::Level::Debug) {
        network::debug_transaction_logs(&client, &report.greeting);
    }
    Ok(())
}
