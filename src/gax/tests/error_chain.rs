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

#[cfg(test)]
mod tests {
    use ibm_cloud_gax::error::{Component, DecodeError, Error};
    use std::error::Error as _;

    const COMPONENT: Component = Component {
        name: "distribution_list",
        version: "1.0.0",
    };

    fn chain(e: &(dyn std::error::Error + 'static)) -> Vec<String> {
        let mut messages = vec![e.to_string()];
        let mut current = e.source();
        while let Some(s) = current {
            messages.push(s.to_string());
            current = s.source();
        }
        messages
    }

    #[test]
    fn decode_error_chain() {
        let inner = DecodeError::UnrecognizedVariant {
            family: "AddDestination",
            field: "destination_type",
            tag: "sms".to_string(),
        };
        let element = DecodeError::Element {
            field: "destinations",
            index: 1,
            source: Box::new(inner.clone()),
        };
        let error = Error::deser(element.clone())
            .with_context("list_distribution_list_destinations", COMPONENT);

        assert!(error.is_deserialization(), "{error:?}");
        assert_eq!(error.decode_error(), Some(&element));
        assert_eq!(error.decode_error().map(|e| e.innermost()), Some(&inner));
        assert_eq!(
            error.operation_id(),
            Some("list_distribution_list_destinations")
        );

        let messages = chain(&error);
        assert_eq!(messages.len(), 3, "{messages:?}");
        assert!(messages[0].contains("cannot deserialize"), "{messages:?}");
        assert!(
            messages[0].contains("component: distribution_list/1.0.0"),
            "{messages:?}"
        );
        assert!(messages[1].contains("element 1 of 'destinations'"), "{messages:?}");
        assert!(messages[2].ends_with(": sms"), "{messages:?}");
    }

    #[test]
    fn transport_error_chain() {
        let error = Error::io(std::io::Error::other("connection reset"))
            .with_context("create_distribution_list_destination", COMPONENT);
        assert!(error.is_io(), "{error:?}");
        assert!(error.decode_error().is_none(), "{error:?}");
        let messages = chain(&error);
        assert_eq!(messages.len(), 2, "{messages:?}");
        assert!(messages[0].contains("connection reset"), "{messages:?}");
        assert!(
            messages[0].contains("operation: create_distribution_list_destination"),
            "{messages:?}"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
        static_assertions::assert_impl_all!(DecodeError: Send, Sync, Clone);
    }
}
