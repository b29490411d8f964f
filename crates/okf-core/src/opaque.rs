//! # Free-Form Values
//!
//! Some schema types (services, service areas, permits) have no settled
//! structure yet. They are carried as arbitrary structured values: any
//! JSON/YAML value is accepted and written back unchanged, and the
//! contract format declares them as text.

/// Declare free-form newtypes over [`serde_json::Value`], each with an
/// opaque [`Describe`](crate::Describe) implementation.
#[macro_export]
macro_rules! opaque_types {
    ($($(#[$meta:meta])* $name:ident => $doc:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub ::serde_json::Value);

            impl $crate::Describe for $name {
                fn describe() -> $crate::TypeDescriptor {
                    $crate::TypeDescriptor::opaque(stringify!($name), $doc)
                }
            }

            impl From<::serde_json::Value> for $name {
                fn from(value: ::serde_json::Value) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

opaque_types! {
    /// A service offered by a facility.
    Service => "A service offered by the facility.",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Describe, Shape};
    use serde_json::json;

    #[test]
    fn test_service_is_transparent() {
        let service = Service(json!({ "name": "laser cutting", "hourly": true }));
        let encoded = serde_json::to_value(&service).unwrap();
        assert_eq!(encoded, json!({ "name": "laser cutting", "hourly": true }));
        let decoded: Service = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, service);
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Service::default().0, serde_json::Value::Null);
    }

    #[test]
    fn test_service_descriptor_is_opaque() {
        let desc = Service::describe();
        assert_eq!(desc.name, "Service");
        assert_eq!(desc.shape, Shape::Opaque);
    }
}
