//! Secret key generation for the register form.
//!
//! The key is a convenience string, not key material: it comes from a
//! non-cryptographic generator and is never stored.

use crate::consts::cli_consts::SECRET_KEY_FRAGMENT_LEN;
use rand::RngCore;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Two random base-36 fragments joined together.
pub fn generate_secret_key() -> String {
    generate_secret_key_with(&mut rand::thread_rng())
}

pub fn generate_secret_key_with<R: RngCore>(rng: &mut R) -> String {
    let mut key = base36_fragment(rng.next_u64());
    key.push_str(&base36_fragment(rng.next_u64()));
    key
}

/// Base-36 digits of `value`, at most [`SECRET_KEY_FRAGMENT_LEN`] of them.
fn base36_fragment(mut value: u64) -> String {
    let mut digits = Vec::with_capacity(SECRET_KEY_FRAGMENT_LEN);
    loop {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits.truncate(SECRET_KEY_FRAGMENT_LEN);
    String::from_utf8(digits).unwrap_or_default()
}
