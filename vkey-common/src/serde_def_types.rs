//! Types & trait implementations to enable deriving serde::{Serialize, Deserialize}
//! on the foreign Arkworks types that we compose into the verification key.
//!
//! Field elements are represented as `0x`-prefixed big-endian hex strings, the
//! same bytes the Solidity encoding uses for them.

use alloc::string::String;
use ark_bn254::{g1::Config as G1Config, g2::Config as G2Config, Fq2Config};
use ark_ec::short_weierstrass::Affine;
use ark_ff::{Fp2ConfigWrapper, MontConfig, QuadExtField};
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, DeserializeAs, SerializeAs};

use crate::{
    constants::NUM_U64S_FELT,
    custom_serde::{BytesDeserializable, BytesSerializable},
    types::{G1Affine, G1BaseField, G2Affine, G2BaseField, MontFp256},
};

/// The prefix of a hex-encoded field element
const HEX_PREFIX: &str = "0x";

/// Implements `serde_with`'s `SerializeAs` / `DeserializeAs` for a remote definition
macro_rules! impl_serde_as {
    ($remote_type:ty, $def_type:ty) => {
        impl SerializeAs<$remote_type> for $def_type {
            fn serialize_as<S>(source: &$remote_type, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                <$def_type>::serialize(source, serializer)
            }
        }

        impl<'de> DeserializeAs<'de, $remote_type> for $def_type {
            fn deserialize_as<D>(deserializer: D) -> Result<$remote_type, D::Error>
            where
                D: Deserializer<'de>,
            {
                <$def_type>::deserialize(deserializer)
            }
        }
    };
}

/// Serializes a 256-bit prime field element as a `0x`-prefixed hex string
/// of its canonical big-endian bytes
pub struct FeltHex;

impl<P: MontConfig<NUM_U64S_FELT>> SerializeAs<MontFp256<P>> for FeltHex {
    fn serialize_as<S>(source: &MontFp256<P>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut hex_str = String::from(HEX_PREFIX);
        hex_str.push_str(&hex::encode(source.serialize_to_bytes()));
        serializer.serialize_str(&hex_str)
    }
}

impl<'de, P: MontConfig<NUM_U64S_FELT>> DeserializeAs<'de, MontFp256<P>> for FeltHex {
    fn deserialize_as<D>(deserializer: D) -> Result<MontFp256<P>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        let digits = hex_str.strip_prefix(HEX_PREFIX).unwrap_or(&hex_str);
        let bytes = hex::decode(digits).map_err(DeError::custom)?;
        MontFp256::<P>::deserialize_from_bytes(&bytes).map_err(DeError::custom)
    }
}

/// Remote definition of the quadratic extension of the Bn254 base field
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(remote = "QuadExtField<Fp2ConfigWrapper<Fq2Config>>")]
pub(crate) struct G2BaseFieldDef {
    /// The constant coefficient
    #[serde_as(as = "FeltHex")]
    pub c0: G1BaseField,
    /// The coefficient of `u`
    #[serde_as(as = "FeltHex")]
    pub c1: G1BaseField,
}

impl_serde_as!(G2BaseField, G2BaseFieldDef);

/// Remote definition of an affine G1 point
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(remote = "Affine<G1Config>")]
pub(crate) struct G1AffineDef {
    /// The x-coordinate
    #[serde_as(as = "FeltHex")]
    x: G1BaseField,
    /// The y-coordinate
    #[serde_as(as = "FeltHex")]
    y: G1BaseField,
    /// Whether this is the point at infinity
    infinity: bool,
}

impl_serde_as!(G1Affine, G1AffineDef);

/// Remote definition of an affine G2 point
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(remote = "Affine<G2Config>")]
pub(crate) struct G2AffineDef {
    /// The x-coordinate
    #[serde_as(as = "G2BaseFieldDef")]
    x: G2BaseField,
    /// The y-coordinate
    #[serde_as(as = "G2BaseFieldDef")]
    y: G2BaseField,
    /// Whether this is the point at infinity
    infinity: bool,
}

impl_serde_as!(G2Affine, G2AffineDef);
