//! # AES-128-GCM operations
//!
//! Contains low level AES-128-GCM operations used for sealing ticket messages.
//!
//! The SPFE expects a 128-bit nonce and a detached 128-bit tag, which differs from the common
//! 96-bit nonce construction, so the cipher type is spelled out here.

use aes::Aes128;
use aes_gcm::{
    AeadInPlace, AesGcm, KeyInit,
    aead::{consts::U16, generic_array::GenericArray},
};

use crate::CryptoError;

pub(crate) const NONCE_SIZE: usize = 16;
pub(crate) const TAG_SIZE: usize = 16;
pub(crate) const KEY_SIZE: usize = 16;

type Aes128Gcm128 = AesGcm<Aes128, U16>;

pub(crate) struct Aes128GcmCiphertext {
    encrypted_bytes: Vec<u8>,
    tag: [u8; TAG_SIZE],
}

impl Aes128GcmCiphertext {
    pub(crate) fn encrypted_bytes(&self) -> &[u8] {
        &self.encrypted_bytes
    }

    pub(crate) fn tag(&self) -> &[u8; TAG_SIZE] {
        &self.tag
    }
}

pub(crate) fn encrypt_aes128_gcm(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    plaintext_secret_data: &[u8],
) -> Result<Aes128GcmCiphertext, CryptoError> {
    let mut buffer = plaintext_secret_data.to_vec();
    let tag = Aes128Gcm128::new(GenericArray::from_slice(key))
        .encrypt_in_place_detached(GenericArray::from_slice(nonce), &[], &mut buffer)
        .map_err(|_| CryptoError::Encrypt)?;

    Ok(Aes128GcmCiphertext {
        encrypted_bytes: buffer,
        tag: tag.into(),
    })
}

pub(crate) fn decrypt_aes128_gcm(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
    tag: &[u8; TAG_SIZE],
) -> Result<Vec<u8>, CryptoError> {
    let mut buffer = ciphertext.to_vec();
    Aes128Gcm128::new(GenericArray::from_slice(key))
        .decrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            &[],
            &mut buffer,
            GenericArray::from_slice(tag),
        )
        .map_err(|_| CryptoError::Decrypt)?;
    Ok(buffer)
}
