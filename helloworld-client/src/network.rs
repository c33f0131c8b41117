//! Access to the Solana cluster.
//!
//! [`Network`] lists the handful of RPC operations the client needs.  The
//! real implementation is provided for [`RpcClient`]; tests use an in-memory
//! cluster instead.

use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Signature, Signer};
use solana_sdk::signer::keypair::Keypair;
use solana_sdk::transaction::Transaction;
use solana_transaction_status::option_serializer::OptionSerializer;
use solana_transaction_status::UiTransactionEncoding;

use crate::{Error, Result};


/// Operations performed against the cluster.
pub trait Network {
    /// Fetches an account; returns `None` if it doesn’t exist.
    fn get_account(&self, address: &Pubkey) -> Result<Option<Account>>;

    /// Returns balance an account holding `data_len` bytes needs to be
    /// exempt from rent.
    fn minimum_balance_for_rent_exemption(&self, data_len: usize)
        -> Result<u64>;

    /// Sends a transaction with a single instruction and waits for its
    /// confirmation.
    ///
    /// `payer` pays the fees and is the only signer of the transaction.
    fn send_instruction(
        &self,
        payer: &Keypair,
        instruction: Instruction,
    ) -> Result<Signature>;
}


impl Network for RpcClient {
    fn get_account(&self, address: &Pubkey) -> Result<Option<Account>> {
        let resp =
            self.get_account_with_commitment(address, self.commitment())?;
        Ok(resp.value)
    }

    fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64> {
        Ok(self.get_minimum_balance_for_rent_exemption(data_len)?)
    }

    fn send_instruction(
        &self,
        payer: &Keypair,
        instruction: Instruction,
    ) -> Result<Signature> {
        let blockhash = self.get_latest_blockhash()?;
        log::debug!("Latest blockhash: {blockhash}");
        log::debug!("Sending transaction to {}…", instruction.program_id);

        let message = Message::new_with_blockhash(
            core::slice::from_ref(&instruction),
            Some(&payer.pubkey()),
            &blockhash,
        );
        let mut tx = Transaction::new_unsigned(message);
        tx.sign(&[payer], blockhash);

        let sig = self.send_and_confirm_transaction(&tx)?;
        log::debug!("Signature: {sig}");
        Ok(sig)
    }
}


/// Returns configuration for fetching a transaction sent with given
/// commitment.
///
/// The node defaults to `finalized` when no commitment is given, so
/// a transaction which has only just been confirmed wouldn’t be found.
pub fn transaction_config(commitment: CommitmentConfig) -> RpcTransactionConfig {
    RpcTransactionConfig {
        encoding: Some(UiTransactionEncoding::Binary),
        commitment: Some(commitment),
        max_supported_transaction_version: Some(0),
    }
}

/// Fetches a confirmed transaction and returns its log messages.
pub fn transaction_logs(
    client: &RpcClient,
    sig: &Signature,
) -> Result<Vec<String>> {
    let config = transaction_config(client.commitment());
    let resp = client.get_transaction_with_config(sig, config)?;
    let (slot, tx) = (resp.slot, resp.transaction);
    log::debug!("Executed in slot: {slot}");

    let log_messages = tx
        .meta
        .map(|meta| meta.log_messages)
        .ok_or(Error::Msg("No transaction metadata"))?;
    match log_messages {
        OptionSerializer::Some(messages) => Ok(messages),
        _ => Err(Error::Msg("No log message")),
    }
}

/// Prints program log messages of a transaction at debug level.
///
/// The logs are diagnostic only; failure to fetch them is reported as
/// a warning.  Returns whether the logs were printed.
pub fn debug_transaction_logs(client: &RpcClient, sig: &Signature) -> bool {
    match transaction_logs(client, sig) {
        Ok(messages) => {
            for msg in messages {
                log::debug!("{msg}");
            }
            true
        }
        Err(err) => {
            log::warn!("Failed to fetch logs of {sig}: {err}");
            false
        }
    }
}
