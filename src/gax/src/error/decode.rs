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

/// Represents a problem decoding a JSON object into a typed value.
///
/// The client libraries return this error (wrapped in
/// [Error][crate::error::Error]) when a response body is valid JSON, but
/// does not match the shape of the expected type. For tagged objects, i.e.
/// objects where a discriminator field selects between several shapes, the
/// variants distinguish a missing tag, a tag of the wrong JSON type, and a tag
/// value unknown to this version of the client library.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::error::DecodeError;
/// let err = DecodeError::UnrecognizedVariant {
///     family: "AddDestination",
///     field: "destination_type",
///     tag: "carrier_pigeon".to_string(),
/// };
/// assert!(err.to_string().contains("carrier_pigeon"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The discriminator field is absent, `null`, or the empty string.
    MissingDiscriminator {
        family: &'static str,
        field: &'static str,
    },

    /// The discriminator field is present, but it is not a JSON string.
    DiscriminatorType {
        family: &'static str,
        field: &'static str,
        found: &'static str,
    },

    /// The discriminator value does not match any known variant.
    UnrecognizedVariant {
        family: &'static str,
        field: &'static str,
        tag: String,
    },

    /// A field of the selected shape is missing or has the wrong type.
    Field { field: &'static str, reason: String },

    /// An element in a list field could not be decoded.
    ///
    /// The element error is the [source][std::error::Error::source] of this
    /// error, and can be downcast to [DecodeError].
    Element {
        field: &'static str,
        index: usize,
        source: Box<DecodeError>,
    },

    /// The value is not a JSON object.
    NotAnObject { found: &'static str },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDiscriminator { family, field } => write!(
                f,
                "required discriminator property '{field}' not found in JSON object for {family}"
            ),
            Self::DiscriminatorType {
                family,
                field,
                found,
            } => write!(
                f,
                "error unmarshalling discriminator property '{field}' for {family}: expected a string, found {found}"
            ),
            Self::UnrecognizedVariant { family, field, tag } => write!(
                f,
                "unrecognized value for discriminator property '{field}' for {family}: {tag}"
            ),
            Self::Field { field, reason } => write!(f, "cannot decode field '{field}': {reason}"),
            Self::Element {
                field,
                index,
                source,
            } => write!(f, "cannot decode element {index} of '{field}': {source}"),
            Self::NotAnObject { found } => write!(f, "expected a JSON object, found {found}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Element { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl DecodeError {
    /// Creates a [DecodeError::Field] error.
    pub fn field<T: std::fmt::Display>(field: &'static str, reason: T) -> Self {
        Self::Field {
            field,
            reason: reason.to_string(),
        }
    }

    /// Returns the most specific error, skipping any list element wrappers.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::error::DecodeError;
    /// let inner = DecodeError::MissingDiscriminator { family: "AddDestination", field: "destination_type" };
    /// let err = DecodeError::Element { field: "destinations", index: 2, source: Box::new(inner.clone()) };
    /// assert_eq!(err.innermost(), &inner);
    /// ```
    pub fn innermost(&self) -> &DecodeError {
        match self {
            Self::Element { source, .. } => source.innermost(),
            e => e,
        }
    }

    /// The name of the field associated with the innermost error, if any.
    pub fn field_name(&self) -> Option<&'static str> {
        match self.innermost() {
            Self::MissingDiscriminator { field, .. }
            | Self::DiscriminatorType { field, .. }
            | Self::UnrecognizedVariant { field, .. }
            | Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}
