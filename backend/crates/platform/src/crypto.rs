//! Cryptographic Utilities
//!
//! Signed tokens of the form `"{payload}.{base64url(HMAC-SHA256(payload))}"`,
//! used for session cookies.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate a random 32-byte signing secret
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

fn mac_for(secret: &[u8], payload: &str) -> HmacSha256 {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret)
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac
}

/// Sign `payload` and return the combined token.
///
/// `payload` must not contain `'.'`.
pub fn sign_token(secret: &[u8], payload: &str) -> String {
    let signature = mac_for(secret, payload).finalize().into_bytes();
    format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a token produced by [`sign_token`] and return its payload.
///
/// Signature comparison is constant-time (`Mac::verify_slice`).
pub fn verify_token<'a>(secret: &[u8], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.split_once('.')?;
    if signature_b64.contains('.') {
        return None;
    }

    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    mac_for(secret, payload)
        .verify_slice(&signature)
        .ok()
        .map(|()| payload)
}
