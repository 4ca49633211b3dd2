// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decode tagged JSON objects into Rust enums.
//!
//! Several IBM Cloud services return (and accept) objects that take one of
//! several shapes. A string field, the *discriminator*, selects the shape.
//! For example, a distribution list destination with
//! `"destination_type": "email"` has different fields than one with
//! `"destination_type": "event_notifications"`.
//!
//! The client libraries represent each of these *variant families* as a Rust
//! enum. The enum implements [VariantFamily], which provides a static, closed
//! table mapping each known discriminator value to a decoding function. The
//! [decode] function reads the discriminator, finds the matching entry, and
//! delegates to it.
//!
//! Decoding is a pure function of the input. Unknown fields are ignored.
//!
//! # Example
//! ```
//! use ibm_cloud_gax::error::DecodeError;
//! use ibm_cloud_gax::variant::{self, DecodeFn, VariantFamily};
//!
//! #[derive(Debug, PartialEq)]
//! enum Shape {
//!     Circle { radius: f64 },
//!     Point,
//! }
//!
//! impl VariantFamily for Shape {
//!     const NAME: &'static str = "Shape";
//!     const DISCRIMINATOR: &'static str = "kind";
//!     const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[
//!         ("circle", |e| Ok(Shape::Circle { radius: variant::required(e, "radius")? })),
//!         ("point", |_| Ok(Shape::Point)),
//!     ];
//!     fn tag(&self) -> &'static str {
//!         match self {
//!             Shape::Circle { .. } => "circle",
//!             Shape::Point => "point",
//!         }
//!     }
//! }
//!
//! let value = serde_json::json!({"kind": "circle", "radius": 2.5});
//! let shape = variant::decode_value::<Shape>(&value)?;
//! assert_eq!(shape, Shape::Circle { radius: 2.5 });
//!
//! let value = serde_json::json!({"kind": "square"});
//! let err = variant::decode_value::<Shape>(&value).unwrap_err();
//! assert!(matches!(err, DecodeError::UnrecognizedVariant { ref tag, .. } if tag == "square"));
//! # Ok::<(), DecodeError>(())
//! ```

use crate::error::DecodeError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A JSON object, before it is decoded into a typed value.
pub type Envelope = serde_json::Map<String, Value>;

/// The signature of the functions in a [VariantFamily] decode table.
pub type DecodeFn<T> = fn(&Envelope) -> Result<T, DecodeError>;

/// A closed set of shapes, discriminated by a string-valued field.
///
/// Implementations are typically enums, where each enum branch corresponds to
/// one entry in the [VARIANTS][VariantFamily::VARIANTS] table.
pub trait VariantFamily: Sized + 'static {
    /// The name of the family, used in error messages.
    const NAME: &'static str;

    /// The name of the discriminator field.
    const DISCRIMINATOR: &'static str;

    /// The decode table: each known discriminator value and its decoder.
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)];

    /// The discriminator value for this instance.
    fn tag(&self) -> &'static str;

    /// The known discriminator values, in table order.
    fn tags() -> impl Iterator<Item = &'static str> {
        Self::VARIANTS.iter().map(|(tag, _)| *tag)
    }
}

/// Decodes an envelope into a member of the family `T`.
///
/// The discriminator must be a non-empty JSON string matching one of the
/// entries in the decode table. The fields of the selected shape are decoded
/// by the table entry.
pub fn decode<T: VariantFamily>(envelope: &Envelope) -> Result<T, DecodeError> {
    let tag = match envelope.get(T::DISCRIMINATOR) {
        None | Some(Value::Null) => return Err(missing_discriminator::<T>()),
        Some(Value::String(s)) if s.is_empty() => return Err(missing_discriminator::<T>()),
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Err(DecodeError::DiscriminatorType {
                family: T::NAME,
                field: T::DISCRIMINATOR,
                found: json_type(other),
            });
        }
    };
    let (_, decoder) = T::VARIANTS
        .iter()
        .find(|(known, _)| *known == tag)
        .ok_or_else(|| DecodeError::UnrecognizedVariant {
            family: T::NAME,
            field: T::DISCRIMINATOR,
            tag: tag.to_string(),
        })?;
    decoder(envelope)
}

/// Decodes any JSON value into a member of the family `T`.
///
/// Fails with [DecodeError::NotAnObject] unless the value is a JSON object.
pub fn decode_value<T: VariantFamily>(value: &Value) -> Result<T, DecodeError> {
    match value {
        Value::Object(envelope) => decode(envelope),
        other => Err(DecodeError::NotAnObject {
            found: json_type(other),
        }),
    }
}

/// Decodes a required list field where each element is a member of `T`.
///
/// Errors in an element are wrapped in [DecodeError::Element], identifying
/// the list field and the element index.
pub fn decode_list<T: VariantFamily>(
    envelope: &Envelope,
    field: &'static str,
) -> Result<Vec<T>, DecodeError> {
    let items = match envelope.get(field) {
        None | Some(Value::Null) => return Err(DecodeError::field(field, MISSING_FIELD)),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(DecodeError::field(
                field,
                format!("expected an array, found {}", json_type(other)),
            ));
        }
    };
    items
        .iter()
        .enumerate()
        .map(|(index, v)| {
            decode_value::<T>(v).map_err(|e| DecodeError::Element {
                field,
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Decodes a required field.
///
/// A missing field, or a field set to `null`, is an error.
pub fn required<T: DeserializeOwned>(
    envelope: &Envelope,
    field: &'static str,
) -> Result<T, DecodeError> {
    match envelope.get(field) {
        None | Some(Value::Null) => Err(DecodeError::field(field, MISSING_FIELD)),
        Some(v) => T::deserialize(v).map_err(|e| DecodeError::field(field, e)),
    }
}

/// Decodes an optional field.
///
/// A missing field, or a field set to `null`, returns `None`.
pub fn optional<T: DeserializeOwned>(
    envelope: &Envelope,
    field: &'static str,
) -> Result<Option<T>, DecodeError> {
    match envelope.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => T::deserialize(v)
            .map(Some)
            .map_err(|e| DecodeError::field(field, e)),
    }
}

/// Implements [serde::Deserialize] for a variant family.
///
/// The family enums use this function so that decoding via `serde` and via
/// [decode] produce the same results.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: VariantFamily,
{
    use serde::Deserialize;
    let envelope = Envelope::deserialize(deserializer)?;
    decode(&envelope).map_err(serde::de::Error::custom)
}

const MISSING_FIELD: &str = "required field is missing";

fn missing_discriminator<T: VariantFamily>() -> DecodeError {
    DecodeError::MissingDiscriminator {
        family: T::NAME,
        field: T::DISCRIMINATOR,
    }
}

/// The JSON type name for a value, used in error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
