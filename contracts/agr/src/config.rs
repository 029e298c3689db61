//! Contract constants for the Agr greeting contract.

/// Text placed in front of every name passed to `hello`. The trailing space is
/// part of the prefix.
pub const GREETING_PREFIX: &str = "Added successfully : ";
