use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::{Pubkey, PubkeyError};

use crate::greeting::GREETING_SIZE;

/// Seed used to derive the greeted account address.
///
/// Together with the payer’s public key and the program id it uniquely
/// identifies the greeted account.  Changing it makes the client use
/// a different account.
pub const GREETING_SEED: &str = "hello";


/// Returns address of the account the payer greets.
///
/// The address is derived with [`Pubkey::create_with_seed`] from `base` (the
/// payer), [`GREETING_SEED`] and `program_id` which is to own the account.  It
/// is a pure function of its arguments so every run of the client with the same
/// payer and program uses the same account.
pub fn greeted_address(
    base: &Pubkey,
    program_id: &Pubkey,
) -> Result<Pubkey, PubkeyError> {
    Pubkey::create_with_seed(base, GREETING_SEED, program_id)
}

/// Generates instruction creating the greeted account.
///
/// The account is created at [`greeted_address`]`(payer, program_id)` with
/// [`GREETING_SIZE`] bytes of zeroed data, owned by `program_id` and funded
/// with `lamports` taken from `payer`.  `payer` is both the funding and the
/// base account so it’s the only signer the transaction needs.
pub fn create_greeted_account(
    payer: &Pubkey,
    program_id: &Pubkey,
    lamports: u64,
) -> Result<Instruction, PubkeyError> {
    let greeted = greeted_address(payer, program_id)?;
    Ok(solana_system_interface::instruction::create_account_with_seed(
        payer,
        &greeted,
        payer,
        GREETING_SEED,
        lamports,
        GREETING_SIZE as u64,
        program_id,
    ))
}

/// Generates instruction greeting given account.
///
/// The hello world program takes no instruction data.  Its only account is the
/// writable greeted account whose counter it increments.
pub fn greet(program_id: Pubkey, greeted: Pubkey) -> Instruction {
    Instruction {
        program_id,
        accounts: vec![AccountMeta::new(greeted, false)],
        data: Vec::new(),
    }
}
