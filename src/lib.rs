//! Wggcrypt - fixed-key AES-256-CBC packer for `.wgg` script artifacts

#![forbid(unsafe_code)]

pub mod cipher;
pub mod error;
pub mod file_ops;
pub mod naming;
pub mod padding;

pub use cipher::{WGG_IV, WGG_KEY, encrypt, encrypt_padded};
pub use error::{ErrorCategory, ErrorKind, Result, WggcryptError};
pub use naming::{format_bytes, wgg_file_name};
pub use padding::{BLOCK_SIZE, pad};
