//! Partial-update builders.

use boxd_core::enums::TargetKind;
use serde::Serialize;

/// Fields of a review that its owner may change. `None` leaves a field
/// untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_kind: Option<TargetKind>,
}

impl ReviewUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.body.is_none()
            && self.rating.is_none()
            && self.target_kind.is_none()
    }
}

pub struct ReviewUpdateBuilder(ReviewUpdate);

impl ReviewUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ReviewUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    #[must_use]
    pub fn artist(mut self, val: impl Into<String>) -> Self {
        self.0.artist = Some(val.into());
        self
    }

    #[must_use]
    pub fn body(mut self, val: impl Into<String>) -> Self {
        self.0.body = Some(val.into());
        self
    }

    #[must_use]
    pub const fn rating(mut self, val: u8) -> Self {
        self.0.rating = Some(val);
        self
    }

    #[must_use]
    pub const fn target_kind(mut self, val: TargetKind) -> Self {
        self.0.target_kind = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> ReviewUpdate {
        self.0
    }
}

impl Default for ReviewUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
