use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ComponentError;

/// Publisher category for a catalog component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublisherType {
  /// Published and maintained by the platform itself.
  #[serde(rename = "platform-owned")]
  PlatformOwned,
  /// Published by a third-party author.
  #[serde(rename = "community")]
  Community,
}

impl FromStr for PublisherType {
  type Err = ComponentError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "platform-owned" => Ok(PublisherType::PlatformOwned),
      "community" => Ok(PublisherType::Community),
      other => Err(ComponentError::UnknownPublisherType(other.to_string())),
    }
  }
}

/// Publisher metadata attached to a catalog component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
  /// Display name of the publisher.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Publisher category. Tags this build does not recognize deserialize
  /// as `None` so a new back-end tag never fails the whole descriptor.
  #[serde(
    rename = "type",
    default,
    deserialize_with = "lenient_publisher_type",
    skip_serializing_if = "Option::is_none"
  )]
  pub author_type: Option<PublisherType>,
}

fn lenient_publisher_type<'de, D>(deserializer: D) -> Result<Option<PublisherType>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<String>::deserialize(deserializer)?;
  Ok(raw.and_then(|tag| tag.parse().ok()))
}

/// A reusable workflow building block as the catalog presents it.
///
/// Read-only input for the display layer; optional fields take their
/// documented defaults when absent (`is_latest` defaults to latest,
/// `deprecated` to not deprecated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
  /// Component name, e.g. "my-org/sentiment-analysis"
  pub name: String,

  /// Semantic version, e.g. "1.0.0"
  pub version: String,

  /// Whether this version is the most recent known for the component.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_latest: Option<bool>,

  /// Whether the component should no longer be used, independent of
  /// version recency.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub deprecated: Option<bool>,

  /// Publisher metadata.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<Author>,
}

impl ComponentDescriptor {
  /// Effective recency. An absent `is_latest` means the descriptor is the
  /// latest version.
  pub fn is_latest(&self) -> bool {
    self.is_latest.unwrap_or(true)
  }

  /// Effective deprecation. Absent means not deprecated.
  pub fn is_deprecated(&self) -> bool {
    self.deprecated.unwrap_or(false)
  }

  /// Publisher category, if the author carries a recognized one.
  pub fn publisher_type(&self) -> Option<PublisherType> {
    self.author.as_ref().and_then(|author| author.author_type)
  }

  /// Stable identity token for this descriptor, used to key caches of
  /// derived display state.
  pub fn key(&self) -> DescriptorKey {
    DescriptorKey::new(&self.name, &self.version)
  }
}

/// Identity token for a descriptor: name plus version.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct DescriptorKey {
  pub name: String,
  pub version: String,
}

impl DescriptorKey {
  pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      version: version.into(),
    }
  }
}
