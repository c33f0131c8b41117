//! Steps of a client run which talk to the cluster.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Signature, Signer};
use solana_sdk::signer::keypair::Keypair;

use crate::greeting::{GreetingAccount, GREETING_SIZE};
use crate::instruction;
use crate::network::Network;
use crate::{Error, Result};


/// Outcome of [`ensure_greeted_account`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provisioned {
    /// The account already existed and nothing was sent.
    Existing(Pubkey),
    /// The account has been created in transaction with given signature.
    Created(Pubkey, Signature),
}

impl Provisioned {
    /// Returns address of the greeted account.
    pub fn address(&self) -> Pubkey {
        match self {
            Self::Existing(address) | Self::Created(address, _) => *address,
        }
    }
}


/// Summary of a full run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub account: Provisioned,
    pub greeting: Signature,
    /// Greeting counter read after the greeting; `None` if it couldn’t be
    /// read.
    pub counter: Option<u32>,
}


/// Verifies that the program is deployed and executable.
pub fn check_program(net: &impl Network, program_id: &Pubkey) -> Result {
    match net.get_account(program_id)? {
        None => Err(Error::ProgramNotDeployed { program_id: *program_id }),
        Some(acc) if !acc.executable => {
            Err(Error::ProgramNotExecutable { program_id: *program_id })
        }
        Some(_) => {
            println!("--- Using program {program_id}");
            Ok(())
        }
    }
}

/// Creates the greeted account unless it already exists.
///
/// The account is funded with the rent-exempt minimum for [`GREETING_SIZE`]
/// bytes.  Calling this repeatedly sends at most one creation transaction;
/// once the account exists subsequent calls are no-ops.
pub fn ensure_greeted_account(
    net: &impl Network,
    payer: &Keypair,
    program_id: &Pubkey,
) -> Result<Provisioned> {
    let greeted = instruction::greeted_address(&payer.pubkey(), program_id)?;
    if net.get_account(&greeted)?.is_some() {
        log::debug!("Greeted account {greeted} already exists");
        return Ok(Provisioned::Existing(greeted));
    }

    println!("Creating account {greeted} to say hello to");
    let lamports = net.minimum_balance_for_rent_exemption(GREETING_SIZE)?;
    log::info!("Funding {greeted} with {lamports} lamports");
    let ix = instruction::create_greeted_account(
        &payer.pubkey(),
        program_id,
        lamports,
    )?;
    let sig = net.send_instruction(payer, ix)?;
    Ok(Provisioned::Created(greeted, sig))
}

/// Sends greeting instruction to the program.
pub fn say_hello(
    net: &impl Network,
    payer: &Keypair,
    program_id: &Pubkey,
    greeted: &Pubkey,
) -> Result<Signature> {
    println!("Saying hello to {greeted}");
    let ix = instruction::greet(*program_id, *greeted);
    net.send_instruction(payer, ix)
}

/// Reads number of times the account has been greeted.
pub fn report_greetings(net: &impl Network, greeted: &Pubkey) -> Result<u32> {
    let acc = net
        .get_account(greeted)?
        .ok_or(Error::NoGreetedAccount { address: *greeted })?;
    let greeting =
        GreetingAccount::decode(&acc.data).map_err(Error::Greeting)?;
    println!("{greeted} has been greeted {} time(s)", greeting.counter);
    Ok(greeting.counter)
}

/// Performs all the steps: checks the program, provisions the greeted
/// account, greets it and reports the counter.
///
/// Once the greeting is confirmed the run has succeeded; failure to read the
/// counter back is only a warning.
pub fn run(
    net: &impl Network,
    payer: &Keypair,
    program_id: &Pubkey,
) -> Result<Report> {
    check_program(net, program_id)?;
    let account = ensure_greeted_account(net, payer, program_id)?;
    let greeted = account.address();
    let greeting = say_hello(net, payer, program_id, &greeted)?;
    let counter = report_greetings(net, &greeted)
        .map_err(|err| log::warn!("Failed to read greeting counter: {err}"))
        .ok();
    Ok(Report { account, greeting, counter })
}
