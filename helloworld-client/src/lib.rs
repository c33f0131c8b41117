// solana-helloworld-client — client saying hello to a deployed Solana program
// © 2024 by Composable Foundation
// © 2025 by Michał Nazarewicz <mina86@mina86.com>
//
// This program is free software; you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation; either version 2 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program; if not, see <https://www.gnu.org/licenses/>.

//! Client for the Solana ‘hello world’ program.
//!
//! The program keeps a greeting counter in an account owned by it.  The account
//! address is derived from the payer’s key, a fixed seed and the program id
//! (see [`instruction::greeted_address`]) so every payer gets their own
//! counter without having to manage an additional keypair.
//!
//! A run of the client:
//!
//! 1. reads Solana CLI configuration to find the RPC endpoint and the payer
//!    keypair ([`config`]),
//! 2. loads the payer and program keypairs ([`keypair`]),
//! 3. verifies the program is deployed and executable,
//! 4. creates the greeted account if it doesn’t exist yet, funding it with the
//!    rent-exempt minimum balance,
//! 5. sends a greeting instruction to the program and
//! 6. reports how many times the account has been greeted ([`greeting`]).
//!
//! Steps 3–6 live in [`provision`] and talk to the cluster only through the
//! [`network::Network`] trait.

pub mod config;
pub mod error;
pub mod greeting;
pub mod instruction;
pub mod keypair;
pub mod network;
pub mod provision;

pub use error::{Error, Result};
