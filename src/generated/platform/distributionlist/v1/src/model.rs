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

const DESTINATION_TYPE: &str = "destination_type";
const EMAIL: &str = "email";
const EVENT_NOTIFICATIONS: &str = "event_notifications";

/// A destination in a distribution list.
///
/// The destination type is sent as the `destination_type` field. Values
/// received from the service with any other destination type fail to decode.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "destination_type")]
#[non_exhaustive]
pub enum AddDestination {
    /// An email destination.
    #[serde(rename = "email")]
    Email(EmailDestination),
    /// An Event Notifications instance.
    #[serde(rename = "event_notifications")]
    EventNotifications(EventNotificationDestination),
}

impl VariantFamily for AddDestination {
    const NAME: &'static str = "AddDestination";
    const DISCRIMINATOR: &'static str = DESTINATION_TYPE;
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[
        (EMAIL, |e| EmailDestination::from_envelope(e).map(Self::Email)),
        (EVENT_NOTIFICATIONS, |e| {
            EventNotificationDestination::from_envelope(e).map(Self::EventNotifications)
        }),
    ];

    fn tag(&self) -> &'static str {
        match self {
            Self::Email(_) => EMAIL,
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

impl std::convert::From<EmailDestination> for AddDestination {
    fn from(value: EmailDestination) -> Self {
        Self::Email(value)
    }
}

impl std::convert::From<EventNotificationDestination> for AddDestination {
    fn from(value: EventNotificationDestination) -> Self {
        Self::EventNotifications(value)
    }
}

/// An email destination in a distribution list.
///
/// The service identifies email destinations by their type alone.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct EmailDestination {}

impl EmailDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    fn from_envelope(_envelope: &Envelope) -> std::result::Result<Self, DecodeError> {
        Ok(Self {})
    }
}

/// An Event Notifications destination in a distribution list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct EventNotificationDestination {
    /// The GUID of the Event Notifications instance.
    pub destination_id: uuid::Uuid,
}

impl EventNotificationDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination_id][EventNotificationDestination::destination_id].
    pub fn set_destination_id<T: std::convert::Into<uuid::Uuid>>(mut self, v: T) -> Self {
        self.destination_id = v.into();
        self
    }

    fn from_envelope(envelope: &Envelope) -> std::result::Result<Self, DecodeError> {
        Ok(Self {
            destination_id: variant::required(envelope, "destination_id")?,
        })
    }
}

/// The destination to add to a distribution list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "destination_type")]
#[non_exhaustive]
pub enum AddDestinationPrototype {
    /// An email destination.
    #[serde(rename = "email")]
    Email(EmailDestinationPrototype),
    /// An Event Notifications instance.
    #[serde(rename = "event_notifications")]
    EventNotifications(EventNotificationDestinationPrototype),
}

impl VariantFamily for AddDestinationPrototype {
    const NAME: &'static str = "AddDestinationPrototype";
    const DISCRIMINATOR: &'static str = DESTINATION_TYPE;
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[
        (EMAIL, |e| EmailDestinationPrototype::from_envelope(e).map(Self::Email)),
        (EVENT_NOTIFICATIONS, |e| {
            EventNotificationDestinationPrototype::from_envelope(e).map(Self::EventNotifications)
        }),
    ];

    fn tag(&self) -> &'static str {
        match self {
            Self::Email(_) => EMAIL,
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

impl std::convert::From<EmailDestinationPrototype> for AddDestinationPrototype {
    fn from(value: EmailDestinationPrototype) -> Self {
        Self::Email(value)
    }
}

impl std::convert::From<EventNotificationDestinationPrototype> for AddDestinationPrototype {
    fn from(value: EventNotificationDestinationPrototype) -> Self {
        Self::EventNotifications(value)
    }
}

/// The email destination to add to a distribution list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct EmailDestinationPrototype {}

impl EmailDestinationPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    fn from_envelope(_envelope: &Envelope) -> std::result::Result<Self, DecodeError> {
        Ok(Self {})
    }
}

/// The Event Notifications instance to add to a distribution list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct EventNotificationDestinationPrototype {
    /// The GUID of the Event Notifications instance.
    pub destination_id: uuid::Uuid,
}

impl EventNotificationDestinationPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination_id][EventNotificationDestinationPrototype::destination_id].
    pub fn set_destination_id<T: std::convert::Into<uuid::Uuid>>(mut self, v: T) -> Self {
        self.destination_id = v.into();
        self
    }

    fn from_envelope(envelope: &Envelope) -> std::result::Result<Self, DecodeError> {
        Ok(Self {
            destination_id: variant::required(envelope, "destination_id")?,
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

    /// Decodes a collection, reporting the index of the first destination
    /// that fails to decode.
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
    /// All the known values.
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
    /// Test an email destination.
    #[serde(rename = "email")]
    Email(TestEmailDestination),
    /// Test an Event Notifications destination.
    #[serde(rename = "event_notifications")]
    EventNotifications(TestEventNotificationDestination),
}

impl VariantFamily for TestDestinationRequestBodyPrototype {
    const NAME: &'static str = "TestDestinationRequestBodyPrototype";
    const DISCRIMINATOR: &'static str = DESTINATION_TYPE;
    const VARIANTS: &'static [(&'static str, DecodeFn<Self>)] = &[
        (EMAIL, |e| TestEmailDestination::from_envelope(e).map(Self::Email)),
        (EVENT_NOTIFICATIONS, |e| {
            TestEventNotificationDestination::from_envelope(e).map(Self::EventNotifications)
        }),
    ];

    fn tag(&self) -> &'static str {
        match self {
            Self::Email(_) => EMAIL,
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

impl std::convert::From<TestEmailDestination> for TestDestinationRequestBodyPrototype {
    fn from(value: TestEmailDestination) -> Self {
        Self::Email(value)
    }
}

impl std::convert::From<TestEventNotificationDestination> for TestDestinationRequestBodyPrototype {
    fn from(value: TestEventNotificationDestination) -> Self {
        Self::EventNotifications(value)
    }
}

/// Sends a test notification to an email destination.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct TestEmailDestination {
    /// The type of the notification to test.
    pub notification_type: NotificationType,
}

impl TestEmailDestination {
    pub fn new(notification_type: NotificationType) -> Self {
        Self { notification_type }
    }

    /// Sets the value of [notification_type][TestEmailDestination::notification_type].
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
/// [DistributionList::list_distribution_list_destinations][crate::client::DistributionList::list_distribution_list_destinations].
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
/// [DistributionList::create_distribution_list_destination][crate::client::DistributionList::create_distribution_list_destination].
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
/// [DistributionList::get_distribution_list_destination][crate::client::DistributionList::get_distribution_list_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDistributionListDestinationRequest {
    /// The IBM Cloud account ID.
    pub account_id: std::string::String,

    /// The ID of the destination.
    pub destination_id: std::string::String,
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

    /// Sets the value of [destination_id][GetDistributionListDestinationRequest::destination_id].
    pub fn set_destination_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.destination_id = v.into();
        self
    }

    /// Verifies all the required fields are set.
    pub fn validate(&self) -> crate::Result<()> {
        required("account_id", &self.account_id)?;
        required("destination_id", &self.destination_id)?;
        Ok(())
    }
}

/// The request message for
/// [DistributionList::delete_distribution_list_destination][crate::client::DistributionList::delete_distribution_list_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDistributionListDestinationRequest {
    /// The IBM Cloud account ID.
    pub account_id: std::string::String,

    /// The ID of the destination.
    pub destination_id: std::string::String,
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

    /// Sets the value of [destination_id][DeleteDistributionListDestinationRequest::destination_id].
    pub fn set_destination_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.destination_id = v.into();
        self
    }

    /// Verifies all the required fields are set.
    pub fn validate(&self) -> crate::Result<()> {
        required("account_id", &self.account_id)?;
        required("destination_id", &self.destination_id)?;
        Ok(())
    }
}

/// The request message for
/// [DistributionList::test_distribution_list_destination][crate::client::DistributionList::test_distribution_list_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct TestDistributionListDestinationRequest {
    /// The IBM Cloud account ID.
    pub account_id: std::string::String,

    /// The ID of the destination.
    pub destination_id: std::string::String,

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

    /// Sets the value of [destination_id][TestDistributionListDestinationRequest::destination_id].
    pub fn set_destination_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.destination_id = v.into();
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
        required("destination_id", &self.destination_id)?;
        if self.test_destination_request_body_prototype.is_none() {
            return Err(missing("test_destination_request_body_prototype"));
        }
        Ok(())
    }
}
