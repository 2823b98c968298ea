use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 of `payload` under `key`, as lowercase hex.
///
/// This is a MAC, not a password hash: there is no stretching, so a key used to
/// store passwords must be random and specific to each subject.
///
/// ```
/// let digest = identcase_core::hash(b"secret", b"salt");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash(payload: &[u8], key: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}
