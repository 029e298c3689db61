use soroban_sdk::{log, Env, String};

use crate::config::GREETING_PREFIX;

/// Build the greeting returned by `hello`.
///
/// The result is the bytes of [`GREETING_PREFIX`] followed by the bytes of
/// `name`, unchanged. Any name is accepted, including the empty string, and
/// nothing is read from or written to contract storage.
pub fn compose(env: &Env, name: &String) -> String {
    let prefix = GREETING_PREFIX.as_bytes();
    log!(env, "composing greeting", name.len());

    let mut buf = alloc::vec![0u8; prefix.len() + name.len() as usize];
    buf[..prefix.len()].copy_from_slice(prefix);
    name.copy_into_slice(&mut buf[prefix.len()..]);

    String::from_bytes(env, &buf)
}
