//! `bossToken` signing.
//!
//! Sources that require signed URLs reject any request whose `bossToken`
//! query parameter does not match:
//!
//! ```text
//! bossToken = hex(HMAC-SHA256(secret, "/<source>/<operation>[/<dims>][/<opts>]/<path>"))
//! ```
//!
//! The signed message is everything after the host, with a single leading `/`.
//! The query string is not part of it.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// HMAC-SHA256 type alias
type HmacSha256 = Hmac<Sha256>;

/// Query parameter carrying the signature.
pub const TOKEN_PARAM: &str = "bossToken";

/// Compute the lowercase hex HMAC-SHA256 of `message` keyed by `secret`.
///
/// The result is always 64 characters long.
pub fn sign(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a token against the expected signature for `message`.
///
/// Tokens that are not valid hex never match. The comparison runs in
/// constant time.
pub fn verify(secret: &str, message: &str, token: &str) -> bool {
    let Ok(provided) = hex::decode(token) else {
        return false;
    };

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let expected = mac.finalize().into_bytes();

    provided.ct_eq(expected.as_slice()).into()
}
