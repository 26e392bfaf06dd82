/// Core runtime value definitions.
///
/// Declares the `Object` enum and the function and builtin payload types,
/// together with kind tags, truthiness, hash-key projection, and the
/// user-facing display form of every value.
pub mod core;

/// Lexical environments.
///
/// Implements the name-to-value mapping with an optional enclosing scope
/// that backs variable lookup and closure capture.
pub mod environment;

/// Hash-key protocol.
///
/// Provides the stable hashable projection used for hash object keys,
/// including the FNV-1a string hash.
pub mod hash_key;
