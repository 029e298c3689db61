#![no_std]
extern crate alloc;

use soroban_sdk::{contract, contractimpl, Env, String};

pub mod config;
pub mod greeting;

/// Agr greeting contract.
///
/// Exposes a single greeting entry point that echoes the caller's name behind
/// a fixed confirmation prefix. The contract holds no state: nothing is
/// stored, no events are emitted and no other contract is called.
///
/// # Contract Functions
///
/// - `hello()` - Returns `"Added successfully : "` followed by the given name
///
/// # Example Usage
///
/// ```rust
/// # use soroban_sdk::{Env, String};
/// # use agr::{Agr, AgrClient};
/// # let env = Env::default();
/// # let contract_id = env.register(Agr, ());
/// # let client = AgrClient::new(&env, &contract_id);
///
/// let greeting = client.hello(&String::from_str(&env, "world"));
/// assert_eq!(greeting, String::from_str(&env, "Added successfully : world"));
/// ```
#[contract]
pub struct Agr;

#[contractimpl]
impl Agr {
    /// Confirm a name back to the caller.
    ///
    /// # Parameters
    ///
    /// * `env` - The Soroban environment
    /// * `name` - Any text, including the empty string; it is not validated
    ///
    /// # Returns
    ///
    /// `"Added successfully : "` followed by `name`, byte for byte. The same
    /// input always produces the same output.
    pub fn hello(env: Env, name: String) -> String {
        greeting::compose(&env, &name)
    }
}
