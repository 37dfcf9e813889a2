//! Block-alignment padding
//!
//! Pads arbitrary byte sequences to the AES block boundary using the
//! pad-with-value scheme: `n` bytes are appended, each holding the value
//! `n`. Padding is always applied - a block-aligned input (including an
//! empty one) gains a full extra block. The decrypting consumer relies on
//! this to recover the original length, so it must not be skipped.

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Pad `input` to the next multiple of [`BLOCK_SIZE`].
///
/// The pad amount is always in `1..=BLOCK_SIZE`, so the returned buffer is
/// strictly longer than the input and its length is a positive multiple of
/// the block size.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let pad_amount = BLOCK_SIZE - (input.len() % BLOCK_SIZE);
    let mut padded = Vec::with_capacity(input.len() + pad_amount);
    padded.extend_from_slice(input);
    padded.resize(input.len() + pad_amount, pad_amount as u8);
    padded
}
