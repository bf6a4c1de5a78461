//! Request signatures.
//!
//! A signature is the hex MD5 of the shared secret followed by every
//! leaf value of the parameters, sorted case-insensitively. Keys do not
//! take part, so the result does not depend on how the mapping is
//! ordered or nested.

use md5::{Digest, Md5};

use crate::params::Params;

/// Name of the parameter carrying the signature.
pub const SIG_PARAM: &str = "sig";

/// Flattens all leaf values of the parameters, ignoring keys.
///
/// Nested mappings and sequences are descended depth first. Null leaves
/// are skipped.
#[must_use]
pub fn extract_param_values(params: &Params) -> Vec<String> {
    let mut values = Vec::new();
    params.collect_leaves(&mut values);
    values
}

/// Returns the unhashed signature string: the secret followed by the
/// sorted leaf values with no separator.
#[must_use]
pub fn signature_string(params: &Params, secret: &str) -> String {
    let mut values = extract_param_values(params);
    // Case-insensitive order, raw bytes as tiebreak so equal-ignoring-case
    // values still sort deterministically.
    values.sort_by_cached_key(|v| (v.to_lowercase(), v.clone()));

    let mut out = String::from(secret);
    for value in &values {
        out.push_str(value);
    }
    out
}

/// Returns the lowercase hex MD5 digest of the signature string.
///
/// This is the value sent as `sig` with every API request.
#[must_use]
pub fn signature_hash(params: &Params, secret: &str) -> String {
    let digest = Md5::digest(signature_string(params, secret).as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
