//! RC4 stream cipher obfuscation layer.
//!
//! Backed by the RustCrypto `rc4` crate rather than a hand-rolled keystream
//! generator. RC4 is symmetric: encryption and decryption are the same
//! `apply_keystream` call.

use cipher::{KeyInit, StreamCipher};
use rc4::Rc4;

/// Size of the RC4 key used throughout this crate (see PID key derivation).
pub const KEY_LEN: usize = 16;

/// Applies the RC4 keystream derived from `key` to `data`, returning the
/// result. Used identically for both obfuscating a freshly signed key body
/// and de-obfuscating one being validated.
pub fn apply(key: &[u8; KEY_LEN], data: &[u8]) -> Vec<u8> {
    let mut buf = data.to_vec();
    let mut cipher = Rc4::new_from_slice(key).expect("RC4 key is exactly 16 bytes");
    cipher.apply_keystream(&mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_then_decrypt_round_trips() {
        let key = [7u8; KEY_LEN];
        let plaintext = b"the quick brown fox jumps";
        let ciphertext = apply(&key, plaintext);
        assert_ne!(ciphertext, plaintext);
        let decrypted = apply(&key, &ciphertext);
        assert_eq!(decrypted, plaintext);
    }
}
