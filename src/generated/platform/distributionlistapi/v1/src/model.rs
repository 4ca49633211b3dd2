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

use gax::error::DecodeError;
use gax::variant::{self, DecodeFn, Envelope, VariantFamily};
use gaxi::path_parameter::{missing, required};

/// The discriminator for all the destination families.
const DESTINATION_TYPE: &str = "destination_type";
const EVENT_NOTIFICATIONS: &str = "event_notifications";

/// A destination in a distribution list.
///
/// The destination type is sent as the `destination_type` field.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "destination_type")]
#[non_exhaustive]
pub enum AddDestination {
    /// An Event Notifications instance.
    #[serde(rename = "event_notifications")]
    EventNotifications(EventNotificationDestination),
}

impl VariantFamily for AddDestination {
    const NAME: &'static str = "AddDestination";
    const DISCRIMINATOR: &'static str = DESTINATION_TYPE;
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[(EVENT_NOTIFICATIONS, |e| {
        EventNotificationDestination::from_envelope(e).map(Self::EventNotifications)
    })];

    fn tag(&self) -> &'static str {
        match self {
            Self::EventNotifications(_) => EVENT_NOTIFICATIONS,
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for AddDestination {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        variant::deserialize(deserializer)
    }
}

impl std::convert::From<EventNotificationDestination> for AddDestination {
    fn from(value: EventNotificationDestination) -> Self {
        Self::EventNotifications(value)
    }
}

/// An Event Notifications destination in a distribution list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct EventNotificationDestination {
    /// The GUID of the Event Notifications instance.
    pub id: uuid::Uuid,
}

impl EventNotificationDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][EventNotificationDestination::id].
    pub fn set_id<T: std::convert::Into<uuid::Uuid>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    fn from_envelope(envelope: &Envelope) -> std::result::Result<Self, DecodeError> {
        Ok(Self {
            id: variant::required(envelope, "id")?,
        })
    }
}

/// The destination to add to a distribution list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "destination_type")]
#[non_exhaustive]
pub enum AddDestinationPrototype {
    /// An Event Notifications instance.
    #[serde(rename = "event_notifications")]
    EventNotifications(EventNotificationDestinationPrototype),
}

impl VariantFamily for AddDestinationPrototype {
    const NAME: &'static str = "AddDestinationPrototype";
    const DISCRIMINATOR: &'static str = DESTINATION_TYPE;
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[(EVENT_NOTIFICATIONS, |e| {
        EventNotificationDestinationPrototype::from_envelope(e).map(Self::EventNotifications)
    })];

    fn tag(&self) -> &'static str {
        match self {
            Self::EventNotifications(_) => EVENT_NOTIFICATIONS,
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for AddDestinationPrototype {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        variant::deserialize(deserializer)
    }
}

impl std::convert::From<EventNotificationDestinationPrototype> for AddDestinationPrototype {
    fn from(value: EventNotificationDestinationPrototype) -> Self {
        Self::EventNotifications(value)
    }
}

/// The Event Notifications instance to add to a distribution list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct EventNotificationDestinationPrototype {
    /// The GUID of the Event Notifications instance.
    pub id: uuid::Uuid,
}

impl EventNotificationDestinationPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][EventNotificationDestinationPrototype::id].
    pub fn set_id<T: std::convert::Into<uuid::Uuid>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    fn from_envelope(envelope: &Envelope) -> std::result::Result<Self, DecodeError> {
        Ok(Self {
            id: variant::required(envelope, "id")?,
        })
    }
}

/// The list of destinations in a distribution list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub struct AddDestinationCollection {
    /// The destinations, in no particular order.
    pub destinations: std::vec::Vec<AddDestination>,
}

impl AddDestinationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destinations][AddDestinationCollection::destinations].
    pub fn set_destinations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<AddDestination>,
    {
        self.destinations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Decodes a collection, preserving the details of any decoding errors.
    ///
    /// A destination that fails to decode is reported with its index.
    pub fn from_envelope(envelope: &Envelope) -> std::result::Result<Self, DecodeError> {
        Ok(Self {
            destinations: variant::decode_list(envelope, "destinations")?,
        })
    }
}

/// The type of notification sent by a destination test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Announcements,
    BillingAndUsage,
    Incident,
    Maintenance,
    Resource,
    SecurityBulletins,
}

impl NotificationType {
    /// All the known values, in wire order.
    pub const ALL: [NotificationType; 6] = [
        Self::Announcements,
        Self::BillingAndUsage,
        Self::Incident,
        Self::Maintenance,
        Self::Resource,
        Self::SecurityBulletins,
    ];

    /// The value as sent on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Announcements => "announcements",
            Self::BillingAndUsage => "billing_and_usage",
            Self::Incident => "incident",
            Self::Maintenance => "maintenance",
            Self::Resource => "resource",
            Self::SecurityBulletins => "security_bulletins",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The destination to test and the type of notification to send.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "destination_type")]
#[non_exhaustive]
pub enum TestDestinationRequestBodyPrototype {
    /// Test an Event Notifications destination.
    #[serde(rename = "event_notifications")]
    EventNotifications(TestEventNotificationDestination),
}

impl VariantFamily for TestDestinationRequestBodyPrototype {
    const NAME: &'static str = "TestDestinationRequestBodyPrototype";
    const DISCRIMINATOR: &'static str = DESTINATION_TYPE;
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[(EVENT_NOTIFICATIONS, |e| {
        TestEventNotificationDestination::from_envelope(e).map(Self::EventNotifications)
    })];

    fn tag(&self) -> &'static str {
        match self {
            Self::EventNotifications(_) => EVENT_NOTIFICATIONS,
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for TestDestinationRequestBodyPrototype {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        variant::deserialize(deserializer)
    }
}

impl std::convert::From<TestEventNotificationDestination> for TestDestinationRequestBodyPrototype {
    fn from(value: TestEventNotificationDestination) -> Self {
        Self::EventNotifications(value)
    }
}

/// Sends a test notification to an Event Notifications destination.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct TestEventNotificationDestination {
    /// The type of the notification to test.
    pub notification_type: NotificationType,
}

impl TestEventNotificationDestination {
    pub fn new(notification_type: NotificationType) -> Self {
        Self { notification_type }
    }

    /// Sets the value of [notification_type][TestEventNotificationDestination::notification_type].
    pub fn set_notification_type<T: std::convert::Into<NotificationType>>(mut self, v: T) -> Self {
        self.notification_type = v.into();
        self
    }

    fn from_envelope(envelope: &Envelope) -> std::result::Result<Self, DecodeError> {
        Ok(Self {
            notification_type: variant::required(envelope, "notification_type")?,
        })
    }
}

/// The result of a destination test.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub struct TestDestinationResponseBody {
    /// The status of the test.
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}

impl TestDestinationResponseBody {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [message][TestDestinationResponseBody::message].
    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// The request message for
/// [DistributionListApi::list_distribution_list_destinations][crate::client::DistributionListApi::list_distribution_list_destinations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDistributionListDestinationsRequest {
    /// The IBM Cloud account ID.
    pub account_id: std::string::String,
}

impl ListDistributionListDestinationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][ListDistributionListDestinationsRequest::account_id].
    pub fn set_account_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }

    /// Verifies all the required fields are set.
    pub fn validate(&self) -> crate::Result<()> {
        required("account_id", &self.account_id)?;
        Ok(())
    }
}

/// The request message for
/// [DistributionListApi::create_distribution_list_destination][crate::client::DistributionListApi::create_distribution_list_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDistributionListDestinationRequest {
    /// The IBM Cloud account ID.
    pub account_id: std::string::String,

    /// The destination to add.
    pub add_destination_prototype: std::option::Option<AddDestinationPrototype>,
}

impl CreateDistributionListDestinationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][CreateDistributionListDestinationRequest::account_id].
    pub fn set_account_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }

    /// Sets the value of [add_destination_prototype][CreateDistributionListDestinationRequest::add_destination_prototype].
    pub fn set_add_destination_prototype<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<AddDestinationPrototype>,
    {
        self.add_destination_prototype = Some(v.into());
        self
    }

    /// Sets or clears the value of [add_destination_prototype][CreateDistributionListDestinationRequest::add_destination_prototype].
    pub fn set_or_clear_add_destination_prototype<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<AddDestinationPrototype>,
    {
        self.add_destination_prototype = v.map(|x| x.into());
        self
    }

    /// Verifies all the required fields are set.
    pub fn validate(&self) -> crate::Result<()> {
        required("account_id", &self.account_id)?;
        if self.add_destination_prototype.is_none() {
            return Err(missing("add_destination_prototype"));
        }
        Ok(())
    }
}

/// The request message for
/// [DistributionListApi::get_distribution_list_destination][crate::client::DistributionListApi::get_distribution_list_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDistributionListDestinationRequest {
    /// The IBM Cloud account ID.
    pub account_id: std::string::String,

    /// The ID of the destination.
    pub id: std::string::String,
}

impl GetDistributionListDestinationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][GetDistributionListDestinationRequest::account_id].
    pub fn set_account_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }

    /// Sets the value of [id][GetDistributionListDestinationRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Verifies all the required fields are set.
    pub fn validate(&self) -> crate::Result<()> {
        required("account_id", &self.account_id)?;
        required("id", &self.id)?;
        Ok(())
    }
}

/// The request message for
/// [DistributionListApi::delete_distribution_list_destination][crate::client::DistributionListApi::delete_distribution_list_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDistributionListDestinationRequest {
    /// The IBM Cloud account ID.
    pub account_id: std::string::String,

    /// The ID of the destination.
    pub id: std::string::String,
}

impl DeleteDistributionListDestinationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][DeleteDistributionListDestinationRequest::account_id].
    pub fn set_account_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }

    /// Sets the value of [id][DeleteDistributionListDestinationRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Verifies all the required fields are set.
    pub fn validate(&self) -> crate::Result<()> {
        required("account_id", &self.account_id)?;
        required("id", &self.id)?;
        Ok(())
    }
}

/// The request message for
/// [DistributionListApi::test_distribution_list_destination][crate::client::DistributionListApi::test_distribution_list_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct TestDistributionListDestinationRequest {
    /// The IBM Cloud account ID.
    pub account_id: std::string::String,

    /// The ID of the destination.
    pub id: std::string::String,

    /// The destination to test and the type of notification to send.
    pub test_destination_request_body_prototype:
        std::option::Option<TestDestinationRequestBodyPrototype>,
}

impl TestDistributionListDestinationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][TestDistributionListDestinationRequest::account_id].
    pub fn set_account_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }

    /// Sets the value of [id][TestDistributionListDestinationRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [test_destination_request_body_prototype][TestDistributionListDestinationRequest::test_destination_request_body_prototype].
    pub fn set_test_destination_request_body_prototype<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<TestDestinationRequestBodyPrototype>,
    {
        self.test_destination_request_body_prototype = Some(v.into());
        self
    }

    /// Sets or clears the value of [test_destination_request_body_prototype][TestDistributionListDestinationRequest::test_destination_request_body_prototype].
    pub fn set_or_clear_test_destination_request_body_prototype<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<TestDestinationRequestBodyPrototype>,
    {
        self.test_destination_request_body_prototype = v.map(|x| x.into());
        self
    }

    /// Verifies all the required fields are set.
    pub fn validate(&self) -> crate::Result<()> {
        required("account_id", &self.account_id)?;
        required("id", &self.id)?;
        if self.test_destination_request_body_prototype.is_none() {
            return Err(missing("test_destination_request_body_prototype"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    const ID: &str = "12345678-1234-1234-1234-123456789012";

    fn envelope(value: Value) -> Envelope {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other:?}"),
        }
    }

    fn event_notifications() -> anyhow::Result<EventNotificationDestination> {
        Ok(EventNotificationDestination::new().set_id(uuid::Uuid::parse_str(ID)?))
    }

    #[test]
    fn decode_event_notifications_destination() -> TestResult {
        let input = envelope(json!({"destination_type": "event_notifications", "id": ID}));
        let got = variant::decode::<AddDestination>(&input)?;
        assert_eq!(got, AddDestination::EventNotifications(event_notifications()?));
        let AddDestination::EventNotifications(destination) = &got;
        assert_eq!(destination.id.to_string(), ID);
        Ok(())
    }

    #[test]
    fn decode_email_is_unrecognized() {
        let input = envelope(json!({"destination_type": "email"}));
        let got = variant::decode::<AddDestination>(&input);
        assert_eq!(
            got,
            Err(DecodeError::UnrecognizedVariant {
                family: "AddDestination",
                field: "destination_type",
                tag: "email".to_string(),
            })
        );
        let fmt = got.unwrap_err().to_string();
        assert!(fmt.contains("email"), "{fmt}");
    }

    #[test]
    fn decode_is_pure() -> TestResult {
        let input = envelope(json!({
            "destination_type": "event_notifications",
            "id": ID,
            "extra": [1, 2],
        }));
        let first = variant::decode::<AddDestination>(&input)?;
        let second = variant::decode::<AddDestination>(&input)?;
        assert_eq!(first, second);
        Ok(())
    }

    fn decode_err<T: VariantFamily>(value: Value) -> Option<DecodeError> {
        variant::decode_value::<T>(&value).err()
    }

    #[test_case(decode_err::<AddDestination>; "add destination")]
    #[test_case(decode_err::<AddDestinationPrototype>; "add destination prototype")]
    #[test_case(decode_err::<TestDestinationRequestBodyPrototype>; "test destination request body")]
    fn missing_discriminator(decoder: fn(Value) -> Option<DecodeError>) {
        for input in [
            json!({"id": ID}),
            json!({"destination_type": null, "id": ID}),
            json!({"destination_type": "", "id": ID}),
        ] {
            let got = decoder(input.clone());
            assert!(
                matches!(got, Some(DecodeError::MissingDiscriminator { field: "destination_type", .. })),
                "{input:?} => {got:?}"
            );
        }
    }

    #[test_case(decode_err::<AddDestination>; "add destination")]
    #[test_case(decode_err::<AddDestinationPrototype>; "add destination prototype")]
    #[test_case(decode_err::<TestDestinationRequestBodyPrototype>; "test destination request body")]
    fn unrecognized_variant(decoder: fn(Value) -> Option<DecodeError>) {
        for tag in ["email", "slack", "EVENT_NOTIFICATIONS", "event notifications"] {
            let got = decoder(json!({
                "destination_type": tag,
                "id": ID,
                "notification_type": "incident",
            }));
            match got {
                Some(DecodeError::UnrecognizedVariant { tag: got, .. }) => assert_eq!(got, tag),
                other => panic!("unexpected result for {tag}: {other:?}"),
            }
        }
    }

    #[test_case(json!(42), "number"; "number")]
    #[test_case(json!(true), "boolean"; "boolean")]
    #[test_case(json!(["event_notifications"]), "array"; "array")]
    #[test_case(json!({"type": "event_notifications"}), "object"; "object")]
    fn discriminator_type(tag: Value, want: &str) {
        let input = envelope(json!({"destination_type": tag, "id": ID}));
        let got = variant::decode::<AddDestination>(&input);
        assert!(
            matches!(got, Err(DecodeError::DiscriminatorType { found, .. }) if found == want),
            "{got:?}"
        );
    }

    #[test_case(json!({"destination_type": "event_notifications"}); "missing")]
    #[test_case(json!({"destination_type": "event_notifications", "id": null}); "null")]
    #[test_case(json!({"destination_type": "event_notifications", "id": 123}); "wrong type")]
    #[test_case(json!({"destination_type": "event_notifications", "id": "not-a-uuid"}); "not a uuid")]
    fn field_error(input: Value) {
        let got = variant::decode_value::<AddDestinationPrototype>(&input).unwrap_err();
        assert_eq!(got.field_name(), Some("id"), "{got:?}");
    }

    #[test_case(json!({"destination_type": "event_notifications"}); "missing")]
    #[test_case(json!({"destination_type": "event_notifications", "notification_type": "weather"}); "unknown value")]
    #[test_case(json!({"destination_type": "event_notifications", "notification_type": 7}); "wrong type")]
    fn notification_type_error(input: Value) {
        let got = variant::decode_value::<TestDestinationRequestBodyPrototype>(&input).unwrap_err();
        assert_eq!(got.field_name(), Some("notification_type"), "{got:?}");
    }

    #[test]
    fn notification_type_values() -> TestResult {
        for value in NotificationType::ALL {
            let input = json!({
                "destination_type": "event_notifications",
                "notification_type": value.as_str(),
            });
            let got = variant::decode_value::<TestDestinationRequestBodyPrototype>(&input)?;
            assert_eq!(
                got,
                TestDestinationRequestBodyPrototype::EventNotifications(
                    TestEventNotificationDestination::new(value)
                )
            );
            assert_eq!(serde_json::to_value(value)?, json!(value.to_string()));
        }
        Ok(())
    }

    #[test]
    fn round_trip() -> TestResult {
        let destination = AddDestination::from(event_notifications()?);
        let value = serde_json::to_value(&destination)?;
        assert_eq!(value, json!({"destination_type": "event_notifications", "id": ID}));
        assert_eq!(variant::decode_value::<AddDestination>(&value)?, destination);
        assert_eq!(serde_json::from_value::<AddDestination>(value)?, destination);

        let prototype = AddDestinationPrototype::from(
            EventNotificationDestinationPrototype::new().set_id(uuid::Uuid::parse_str(ID)?),
        );
        let value = serde_json::to_value(&prototype)?;
        assert_eq!(variant::decode_value::<AddDestinationPrototype>(&value)?, prototype);

        let test = TestDestinationRequestBodyPrototype::from(TestEventNotificationDestination::new(
            NotificationType::SecurityBulletins,
        ));
        let value = serde_json::to_value(&test)?;
        assert_eq!(
            value,
            json!({
                "destination_type": "event_notifications",
                "notification_type": "security_bulletins",
            })
        );
        assert_eq!(
            variant::decode_value::<TestDestinationRequestBodyPrototype>(&value)?,
            test
        );
        Ok(())
    }

    #[test]
    fn decode_tables() {
        fn check<T: VariantFamily>() {
            let tags = T::tags().collect::<Vec<_>>();
            assert_eq!(tags, vec!["event_notifications"], "{}", T::NAME);
            assert_eq!(T::DISCRIMINATOR, "destination_type", "{}", T::NAME);
        }
        check::<AddDestination>();
        check::<AddDestinationPrototype>();
        check::<TestDestinationRequestBodyPrototype>();
    }

    #[test]
    fn collection() -> TestResult {
        let input = envelope(json!({"destinations": [
            {"destination_type": "event_notifications", "id": ID},
            {"destination_type": "event_notifications", "id": ID, "name": "ignored"},
        ]}));
        let got = AddDestinationCollection::from_envelope(&input)?;
        let want = AddDestinationCollection::new()
            .set_destinations([event_notifications()?, event_notifications()?]);
        assert_eq!(got, want);

        let got = serde_json::from_value::<AddDestinationCollection>(Value::Object(input))?;
        assert_eq!(got, want);

        let got = AddDestinationCollection::from_envelope(&envelope(json!({"destinations": []})))?;
        assert!(got.destinations.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn collection_errors() {
        let input = envelope(json!({"destinations": [
            {"destination_type": "event_notifications", "id": ID},
            {"destination_type": "email"},
        ]}));
        let got = AddDestinationCollection::from_envelope(&input).unwrap_err();
        assert!(
            matches!(got, DecodeError::Element { field: "destinations", index: 1, .. }),
            "{got:?}"
        );
        assert!(
            matches!(got.innermost(), DecodeError::UnrecognizedVariant { tag, .. } if tag == "email"),
            "{got:?}"
        );

        let got = AddDestinationCollection::from_envelope(&envelope(json!({}))).unwrap_err();
        assert_eq!(got.field_name(), Some("destinations"), "{got:?}");
    }

    #[test]
    fn validate_requests() -> TestResult {
        let err = ListDistributionListDestinationsRequest::new().validate().unwrap_err();
        assert_eq!(err.invalid_field(), Some("account_id"));
        ListDistributionListDestinationsRequest::new()
            .set_account_id("a")
            .validate()?;

        let err = CreateDistributionListDestinationRequest::new()
            .set_account_id("a")
            .validate()
            .unwrap_err();
        assert_eq!(err.invalid_field(), Some("add_destination_prototype"));

        let err = GetDistributionListDestinationRequest::new()
            .set_account_id("a")
            .validate()
            .unwrap_err();
        assert_eq!(err.invalid_field(), Some("id"));

        let err = DeleteDistributionListDestinationRequest::new()
            .set_id("b")
            .validate()
            .unwrap_err();
        assert_eq!(err.invalid_field(), Some("account_id"));

        let err = TestDistributionListDestinationRequest::new()
            .set_account_id("")
            .set_id("b")
            .set_test_destination_request_body_prototype(TestEventNotificationDestination::new(
                NotificationType::Incident,
            ))
            .validate()
            .unwrap_err();
        assert_eq!(err.invalid_field(), Some("account_id"));
        Ok(())
    }

    #[test]
    fn response_body() -> TestResult {
        let input = json!({"message": "success"});
        let got = serde_json::from_value::<TestDestinationResponseBody>(input)?;
        assert_eq!(got, TestDestinationResponseBody::new().set_message("success"));
        let got = serde_json::from_value::<TestDestinationResponseBody>(json!({}))?;
        assert_eq!(got, TestDestinationResponseBody::default());
        assert_eq!(serde_json::to_value(&got)?, json!({}));
        Ok(())
    }
}
