//! Fixed-key AES-256-CBC encryption
//!
//! Encrypts padded buffers with a fixed key and fixed IV. Both constants
//! are interoperability values shared with the external `.wgg` consumer:
//! they are not secrets, are never rotated, and must not be replaced with
//! random per-call values - the consumer expects byte-identical output for
//! byte-identical input. The IV reuse across all calls is a known weakness
//! of the scheme, accepted for compatibility.
//!
//! Padding is handled exclusively by [`crate::padding::pad`]; the cipher
//! itself runs with no internal padding so the two stages never disagree
//! about where the padding came from.

use crate::error::{ErrorCategory, ErrorKind, Result, WggcryptError};
use crate::padding::{BLOCK_SIZE, pad};
use aes::Aes256;
use aes::cipher::{BlockEncryptMut, KeyIvInit, block_padding::NoPadding};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// Fixed 256-bit AES key shared with the `.wgg` consumer.
pub const WGG_KEY: [u8; 32] = [
    0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, //
    0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F, 0x3C, //
    0x76, 0x2E, 0x71, 0x60, 0xF3, 0x8B, 0x4D, 0xA5, //
    0x6A, 0x78, 0x4D, 0x90, 0x45, 0x19, 0x0C, 0xFE,
];

/// Fixed CBC initialization vector, identical for every encryption.
pub const WGG_IV: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, //
    0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
];

/// Encrypt an already-padded buffer with the fixed key and IV.
///
/// The buffer length must be a multiple of the block size; anything else
/// means the padding stage was bypassed and is reported as an
/// [`ErrorKind::UnalignedBuffer`] error. The ciphertext has the same
/// length as the input.
pub fn encrypt_padded(padded: &[u8]) -> Result<Vec<u8>> {
    if padded.len() % BLOCK_SIZE != 0 {
        return Err(WggcryptError::with_kind(
            ErrorCategory::Internal,
            ErrorKind::UnalignedBuffer,
            format!(
                "buffer length {} is not a multiple of the {} byte block size",
                padded.len(),
                BLOCK_SIZE
            ),
        ));
    }

    let mut buffer = padded.to_vec();
    let message_len = buffer.len();
    let ciphertext_len = Aes256CbcEnc::new(&WGG_KEY.into(), &WGG_IV.into())
        .encrypt_padded_mut::<NoPadding>(&mut buffer, message_len)
        .map_err(|e| {
            WggcryptError::with_kind(
                ErrorCategory::Internal,
                ErrorKind::CipherFailure,
                format!("AES-256-CBC encryption failed: {}", e),
            )
        })?
        .len();

    debug_assert_eq!(ciphertext_len, message_len);
    Ok(buffer)
}

/// Pad and encrypt a plaintext of any length.
///
/// This is the whole `.wgg` transform: the returned ciphertext is what a
/// `.wgg` artifact contains. Deterministic - two calls with identical
/// plaintext produce byte-identical ciphertext.
pub fn encrypt(plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_padded(&pad(plaintext))
}
