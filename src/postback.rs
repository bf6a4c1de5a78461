//! Inbound postback verification.
//!
//! Sailthru calls back into the application with form-encoded POSTs
//! signed the same way as API requests. [`Params::from_form`] decodes
//! the body; the functions here check it.

use crate::api::{ApiError, SailthruClient};
use crate::params::Params;
use crate::signature::{SIG_PARAM, signature_hash};
use crate::transport::HttpClient;

const VERIFY_FIELDS: [&str; 4] = ["action", "email", "send_id", SIG_PARAM];
const OPTOUT_FIELDS: [&str; 3] = ["action", "email", SIG_PARAM];

/// Returns true if `sig` matches the signature of all other fields.
///
/// A missing or non-string `sig` fails verification.
#[must_use]
pub fn verify_signature(params: &Params, secret: &str) -> bool {
    let Some(sig) = params.get_str(SIG_PARAM) else {
        return false;
    };

    let mut unsigned = params.clone();
    unsigned.remove(SIG_PARAM);

    signature_hash(&unsigned, secret) == sig
}

/// Returns true for a correctly signed postback of the given action
/// carrying all of `fields`.
fn is_signed_action(params: &Params, secret: &str, action: &str, fields: &[&str]) -> bool {
    if let Some(missing) = fields.iter().find(|f| !params.contains_key(f)) {
        tracing::debug!(action, field = missing, "Postback is missing a required field");
        return false;
    }

    if params.get_str("action") != Some(action) {
        return false;
    }

    let valid = verify_signature(params, secret);
    if !valid {
        tracing::warn!(action, "Rejected postback with invalid signature");
    }
    valid
}

/// Returns true if `params` is a correctly signed optout postback.
#[must_use]
pub fn is_optout_post(params: &Params, secret: &str) -> bool {
    is_signed_action(params, secret, "optout", &OPTOUT_FIELDS)
}

/// Returns true if `params` is a correctly signed verify postback.
///
/// This checks the request only; [`SailthruClient::receive_verify_post`]
/// also confirms the send with the API.
#[must_use]
pub fn is_verify_post(params: &Params, secret: &str) -> bool {
    is_signed_action(params, secret, "verify", &VERIFY_FIELDS)
}

impl<H: HttpClient> SailthruClient<H> {
    /// Returns true if `params` is an authenticated verify postback.
    ///
    /// Besides the signature, the referenced send is fetched and its
    /// recipient must match the posted `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if fetching the send fails.
    pub async fn receive_verify_post(&self, params: &Params) -> Result<bool, ApiError> {
        if !is_verify_post(params, self.credentials().secret()) {
            return Ok(false);
        }

        let (Some(send_id), Some(email)) = (params.get_str("send_id"), params.get_str("email"))
        else {
            return Ok(false);
        };

        let send = self.get_send(send_id).await?;
        Ok(send.get_str("email") == Some(email))
    }
}

impl<H> SailthruClient<H> {
    /// Returns true if `params` is an authenticated optout postback.
    #[must_use]
    pub fn receive_optout_post(&self, params: &Params) -> bool {
        is_optout_post(params, self.credentials().secret())
    }
}

#[cfg(test)]
#[path = "postback_tests.rs"]
mod tests;
