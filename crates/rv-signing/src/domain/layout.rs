//! # Signature Wire Layout
//!
//! Fixed-size binary layout of a full signature blob. Components sit
//! back-to-back in canonical order with no tags or length prefixes:
//!
//! ```text
//! offset 0    intermediate public key       32 bytes
//! offset 32   intermediate key expiration    4 bytes (LE u32, days since 1970-01-01)
//! offset 36   intermediate key signature    64 bytes
//! offset 100  salt                          16 bytes
//! offset 116  payload signature             64 bytes
//!             total                        180 bytes
//! ```

use std::ops::Range;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use chrono::{DateTime, Utc};

use super::errors::SignatureError;

const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// COMPONENTS
// =============================================================================

/// One fixed-size field of a signature blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureComponent {
    /// Ed25519 public key of the intermediate signer
    IntermediatePublicKey,
    /// Days since epoch, little-endian `u32`
    IntermediateKeyExpiration,
    /// Root key signature over `expiration || intermediate key`
    IntermediateKeySignature,
    /// Per-signature random salt
    Salt,
    /// Intermediate key signature over `salt || parameters`
    Payload,
}

impl SignatureComponent {
    /// All components in wire order.
    pub const ALL: [SignatureComponent; 5] = [
        SignatureComponent::IntermediatePublicKey,
        SignatureComponent::IntermediateKeyExpiration,
        SignatureComponent::IntermediateKeySignature,
        SignatureComponent::Salt,
        SignatureComponent::Payload,
    ];

    /// Size of a full blob.
    pub const TOTAL_SIZE: usize = Self::total_size();

    /// Size of this component in bytes.
    pub const fn size(self) -> usize {
        match self {
            SignatureComponent::IntermediatePublicKey => 32,
            SignatureComponent::IntermediateKeyExpiration => 4,
            SignatureComponent::IntermediateKeySignature => 64,
            SignatureComponent::Salt => 16,
            SignatureComponent::Payload => 64,
        }
    }

    /// Sum of the sizes of all components preceding this one.
    pub const fn offset(self) -> usize {
        let mut offset = 0;
        let mut i = 0;
        while i < Self::ALL.len() {
            let component = Self::ALL[i];
            if component as u8 == self as u8 {
                break;
            }
            offset += component.size();
            i += 1;
        }
        offset
    }

    /// Byte range of this component within a full blob.
    pub const fn range(self) -> Range<usize> {
        self.offset()..self.offset() + self.size()
    }

    /// Slice this component out of `blob`.
    ///
    /// Fails without looking at the contents unless `blob` is exactly
    /// [`TOTAL_SIZE`](Self::TOTAL_SIZE) bytes.
    pub fn slice(self, blob: &[u8]) -> Result<&[u8], SignatureError> {
        if blob.len() != Self::TOTAL_SIZE {
            return Err(SignatureError::InvalidSize(blob.len()));
        }
        Ok(&blob[self.range()])
    }

    const fn total_size() -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < Self::ALL.len() {
            total += Self::ALL[i].size();
            i += 1;
        }
        total
    }
}

// =============================================================================
// EXPIRATION
// =============================================================================

/// Intermediate key expiration, encoded as little-endian days since epoch.
///
/// A value of zero is the "never valid" sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntermediateKeyExpiration([u8; 4]);

impl IntermediateKeyExpiration {
    /// The reserved invalid value.
    pub const INVALID: Self = Self([0; 4]);

    /// Wrap raw wire bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Encode a day count.
    pub fn from_days(days: u32) -> Self {
        Self(days.to_le_bytes())
    }

    /// Encode the day containing `date`, truncating toward the epoch.
    ///
    /// Dates before the epoch clamp to the sentinel.
    pub fn from_date(date: DateTime<Utc>) -> Self {
        let days = date.timestamp().div_euclid(SECONDS_PER_DAY);
        Self::from_days(u32::try_from(days.max(0)).unwrap_or(u32::MAX))
    }

    /// Raw wire bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Days since epoch.
    pub fn days(&self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// Whether this is the reserved zero value.
    pub fn is_sentinel(&self) -> bool {
        self.days() == 0
    }

    /// Midnight UTC of the encoded day, or `None` for the sentinel and
    /// day counts chrono cannot represent.
    pub fn to_date(&self) -> Option<DateTime<Utc>> {
        if self.is_sentinel() {
            return None;
        }
        DateTime::from_timestamp(i64::from(self.days()) * SECONDS_PER_DAY, 0)
    }
}

// =============================================================================
// FULL BLOB
// =============================================================================

/// A decoded signature blob with every component split out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureBlob {
    pub intermediate_public_key: [u8; 32],
    pub intermediate_key_expiration: IntermediateKeyExpiration,
    pub intermediate_key_signature: [u8; 64],
    pub salt: [u8; 16],
    pub payload: [u8; 64],
}

impl SignatureBlob {
    /// Split a raw blob into its components.
    pub fn from_bytes(blob: &[u8]) -> Result<Self, SignatureError> {
        if blob.len() != SignatureComponent::TOTAL_SIZE {
            return Err(SignatureError::InvalidSize(blob.len()));
        }

        Ok(Self {
            intermediate_public_key: field(blob, SignatureComponent::IntermediatePublicKey)?,
            intermediate_key_expiration: IntermediateKeyExpiration::from_bytes(field(
                blob,
                SignatureComponent::IntermediateKeyExpiration,
            )?),
            intermediate_key_signature: field(blob, SignatureComponent::IntermediateKeySignature)?,
            salt: field(blob, SignatureComponent::Salt)?,
            payload: field(blob, SignatureComponent::Payload)?,
        })
    }

    /// Decode the base64 header value and split it.
    pub fn from_base64(encoded: &str) -> Result<Self, SignatureError> {
        let blob = B64
            .decode(encoded.as_bytes())
            .map_err(|_| SignatureError::NotBase64(encoded.to_string()))?;
        Self::from_bytes(&blob)
    }

    /// Concatenate the components in wire order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut blob = Vec::with_capacity(SignatureComponent::TOTAL_SIZE);
        blob.extend_from_slice(&self.intermediate_public_key);
        blob.extend_from_slice(self.intermediate_key_expiration.as_bytes());
        blob.extend_from_slice(&self.intermediate_key_signature);
        blob.extend_from_slice(&self.salt);
        blob.extend_from_slice(&self.payload);
        blob
    }

    /// Base64 form, as carried in the signature header.
    pub fn to_base64(&self) -> String {
        B64.encode(self.to_bytes())
    }
}

fn field<const N: usize>(
    blob: &[u8],
    component: SignatureComponent,
) -> Result<[u8; N], SignatureError> {
    component
        .slice(blob)?
        .try_into()
        .map_err(|_| SignatureError::InvalidSize(blob.len()))
}
