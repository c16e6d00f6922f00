use serde::{Deserialize, Serialize};
use verbena_component::{ComponentDescriptor, PublisherType};

/// Badge categories shown on a catalog card.
///
/// Kinds split into two axes: provenance (`Official` | `Community`) and
/// lifecycle (`Deprecated` | `Outdated` | `Latest`). A descriptor
/// contributes at most one badge per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
  Official,
  Community,
  Latest,
  Outdated,
  Deprecated,
}

impl BadgeKind {
  /// Label rendered on the badge.
  pub fn label(&self) -> &'static str {
    match self {
      BadgeKind::Official => "Official",
      BadgeKind::Community => "Community",
      BadgeKind::Latest => "Latest",
      BadgeKind::Outdated => "Outdated",
      BadgeKind::Deprecated => "Deprecated",
    }
  }
}

/// A single display badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
  pub kind: BadgeKind,

  /// Declared in the wire shape but never populated by current logic.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

impl Badge {
  fn new(kind: BadgeKind) -> Self {
    Self {
      kind,
      version: None,
    }
  }
}

/// Single-badge classification for compact card layouts.
///
/// First match wins: deprecation beats recency, recency beats provenance.
/// The provenance fallback cannot fire while an absent `is_latest` defaults
/// to latest; it stays until product confirms whether provenance should
/// rank higher.
pub fn classify(descriptor: &ComponentDescriptor) -> BadgeKind {
  if descriptor.is_deprecated() {
    BadgeKind::Deprecated
  } else if !descriptor.is_latest() {
    BadgeKind::Outdated
  } else if descriptor.is_latest() {
    BadgeKind::Latest
  } else if descriptor.publisher_type() == Some(PublisherType::PlatformOwned) {
    BadgeKind::Official
  } else {
    BadgeKind::Community
  }
}

/// Full ordered badge list for a descriptor.
///
/// The provenance badge (if any) always precedes the lifecycle badge
/// (if any); rendering relies on that order.
pub fn badges_for(descriptor: &ComponentDescriptor) -> Vec<Badge> {
  let mut badges = Vec::with_capacity(2);

  match descriptor.publisher_type() {
    Some(PublisherType::PlatformOwned) => badges.push(Badge::new(BadgeKind::Official)),
    Some(PublisherType::Community) => badges.push(Badge::new(BadgeKind::Community)),
    None => {}
  }

  if descriptor.is_deprecated() {
    badges.push(Badge::new(BadgeKind::Deprecated));
  } else if !descriptor.is_latest() {
    badges.push(Badge::new(BadgeKind::Outdated));
  } else {
    badges.push(Badge::new(BadgeKind::Latest));
  }

  badges
}
