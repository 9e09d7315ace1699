//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! AES-256-GCM backed [`CryptoProvider`] implementation, used to encrypt
//! sensitive values (e.g. API keys) at rest.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{Aes256Gcm, Key, Nonce};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::{CryptoProvider, EncryptedData};

use crate::constants::crypto::AES_GCM_KEY_SIZE;

/// AES-256-GCM implementation of [`CryptoProvider`].
#[derive(Clone)]
pub struct CryptoService {
    cipher: Aes256Gcm,
}

impl std::fmt::Debug for CryptoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CryptoService")
    }
}

impl CryptoService {
    /// Build a service from a raw 256-bit key.
    ///
    /// # Errors
    /// Returns an error if `master_key` is not exactly [`AES_GCM_KEY_SIZE`] bytes.
    pub fn new(master_key: Vec<u8>) -> Result<Self> {
        if master_key.len() != AES_GCM_KEY_SIZE {
            return Err(Error::Configuration {
                message: format!(
                    "master key must be {AES_GCM_KEY_SIZE} bytes, got {}",
                    master_key.len()
                ),
                source: None,
            });
        }
        let key = Key::<Aes256Gcm>::from_slice(&master_key);
        Ok(Self { cipher: Aes256Gcm::new(key) })
    }

    /// Generate a fresh random 256-bit key suitable for [`Self::new`].
    #[must_use]
    pub fn generate_master_key() -> Vec<u8> {
        let mut key = vec![0u8; AES_GCM_KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        key
    }
}

impl CryptoProvider for CryptoService {
    fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedData> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self.cipher.encrypt(&nonce, plaintext).map_err(|e| Error::Infrastructure {
            message: format!("encryption failed: {e}"),
            source: None,
        })?;
        Ok(EncryptedData::new(ciphertext, nonce.to_vec()))
    }

    fn decrypt(&self, encrypted_data: &EncryptedData) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(&encrypted_data.nonce);
        self.cipher
            .decrypt(nonce, encrypted_data.ciphertext.as_slice())
            .map_err(|e| Error::Infrastructure {
                message: format!("decryption failed: {e}"),
                source: None,
            })
    }

    fn provider_name(&self) -> &str {
        "aes-256-gcm"
    }
}
