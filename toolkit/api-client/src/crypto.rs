//! Wallet key material for API tests.

use bip39::Mnemonic;
use ed25519_zebra::{SigningKey, VerificationKey};
use rand::RngCore;
use sha3::{Digest, Sha3_256};

pub struct KeyPair {
	pub signing_key: SigningKey,
	pub public_key: VerificationKey,
}

impl KeyPair {
	pub fn public_key_hex(&self) -> String {
		hex::encode(self.public_key.as_ref())
	}

	pub fn private_key_hex(&self) -> String {
		hex::encode(self.signing_key.as_ref())
	}

	pub fn sign_hex(&self, message: &[u8]) -> String {
		hex::encode(self.signing_key.sign(message).to_bytes())
	}
}

/// A fresh 24 word mnemonic.
pub fn generate_mnemonic() -> Result<String, bip39::Error> {
	let mut entropy = [0u8; 32];
	rand::rng().fill_bytes(&mut entropy);
	mnemonic_from_entropy(&entropy)
}

pub fn mnemonic_from_entropy(entropy: &[u8]) -> Result<String, bip39::Error> {
	Ok(Mnemonic::from_entropy(entropy)?.to_string())
}

/// Derives the wallet key from the first 32 bytes of the mnemonic's seed (empty passphrase).
pub fn generate_keys(mnemonic: &str) -> Result<KeyPair, bip39::Error> {
	let seed = Mnemonic::parse(mnemonic)?.to_seed_normalized("");
	let mut secret = [0u8; 32];
	secret.copy_from_slice(&seed[..32]);
	let signing_key = SigningKey::from(secret);
	let public_key = VerificationKey::from(&signing_key);
	Ok(KeyPair { signing_key, public_key })
}

/// Client id of a wallet: hex SHA3-256 of its raw public key bytes.
pub fn client_id(public_key_hex: &str) -> Result<String, hex::FromHexError> {
	let public_key = hex::decode(public_key_hex)?;
	Ok(hex::encode(Sha3_256::digest(&public_key)))
}
