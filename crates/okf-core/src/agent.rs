//! # Agents
//!
//! A person or organisation. The same shape is reused for a facility's
//! owner, its contact for enquiries, its affiliations and its partners
//! or funders.

use serde::{Deserialize, Serialize};

use crate::descriptor::{Describe, FieldDescriptor, FieldType, Rule, TypeDescriptor};
use crate::location::Location;

/// A person or organisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    /// Required.
    pub name: String,
    pub location: Location,
    /// Name of the key point of contact.
    pub contact_person: String,
    pub contact: Contact,
    pub website: String,
    pub social_media: SocialMedia,
}

impl Agent {
    /// An agent known only by name and website.
    pub fn named(name: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
            ..Self::default()
        }
    }
}

const AGENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", "name", "name", FieldType::Text, "Name of the person or organisation.")
        .with_rule(Rule::Required),
    FieldDescriptor::new(
        "location",
        "location",
        "location",
        FieldType::Named("Location"),
        "Location of the person or organisation.",
    ),
    FieldDescriptor::new(
        "contact_person",
        "contact_person",
        "contactPerson",
        FieldType::Text,
        "The key point of contact.",
    ),
    FieldDescriptor::new(
        "contact",
        "contact",
        "contact",
        FieldType::Named("Contact"),
        "Contact channels.",
    ),
    FieldDescriptor::new("website", "website", "website", FieldType::Text, "Website URL."),
    FieldDescriptor::new(
        "social_media",
        "social_media",
        "socialMedia",
        FieldType::Named("SocialMedia"),
        "Social media links.",
    ),
];

impl Describe for Agent {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("Agent", "A person or organisation.", AGENT_FIELDS)
    }
}

/// Contact channels of a facility, person or organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub landline: String,
    pub mobile: String,
    pub fax: String,
    pub email: String,
    pub whatsapp: String,
}

const CONTACT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("landline", "landline", "landline", FieldType::Text, "Landline telephone number."),
    FieldDescriptor::new("mobile", "mobile", "mobile", FieldType::Text, "Mobile telephone number."),
    FieldDescriptor::new("fax", "fax", "fax", FieldType::Text, "Fax number."),
    FieldDescriptor::new("email", "email", "email", FieldType::Text, "Email address."),
    FieldDescriptor::new("whatsapp", "whatsapp", "whatsapp", FieldType::Text, "WhatsApp number."),
];

impl Describe for Contact {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("Contact", "Contact channels.", CONTACT_FIELDS)
    }
}

/// Social media presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub other_urls: Vec<String>,
}

const SOCIAL_MEDIA_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("facebook", "facebook", "facebook", FieldType::Text, "Facebook page."),
    FieldDescriptor::new("twitter", "twitter", "twitter", FieldType::Text, "Twitter handle."),
    FieldDescriptor::new("instagram", "instagram", "instagram", FieldType::Text, "Instagram account."),
    FieldDescriptor::new(
        "other_urls",
        "other_urls",
        "otherUrls",
        FieldType::List(&FieldType::Text),
        "Any other URLs.",
    ),
];

impl Describe for SocialMedia {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("SocialMedia", "Social media links.", SOCIAL_MEDIA_FIELDS)
    }
}
