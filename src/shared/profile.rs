//! Profile wire types
//!
//! A profile comes in two shapes: the owner's view, which carries the email
//! address, and the public view served to anonymous visitors, which has no
//! email field at all. Keeping them as separate types means a public
//! response cannot leak the address by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::error::SharedError;
use crate::shared::link::LinkView;
use crate::shared::UserId;

/// Display accent colour, normalised to lowercase `#rgb` or `#rrggbb`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor(String);

impl AccentColor {
    /// Parse a hex colour such as `#FF6B6B` or `#4ec`
    pub fn parse(raw: &str) -> Result<Self, SharedError> {
        let value = raw.trim();
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| SharedError::validation("accentColor", "Accent color must start with '#'"))?;

        if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SharedError::validation(
                "accentColor",
                "Accent color must be a hex color like #RRGGBB",
            ));
        }

        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccentColor {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.0
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Profile as seen by its authenticated owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub accent_color: Option<String>,
    pub avatar_path: Option<String>,
}

/// Profile as seen by anonymous visitors; has no email field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub username: String,
    pub accent_color: Option<String>,
    pub avatar_path: Option<String>,
}

impl From<OwnerProfile> for PublicProfile {
    fn from(profile: OwnerProfile) -> Self {
        Self {
            username: profile.username,
            accent_color: profile.accent_color,
            avatar_path: profile.avatar_path,
        }
    }
}

/// Everything a public profile page needs, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPage {
    pub profile: PublicProfile,
    pub links: Vec<LinkView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_color_accepts_hex() {
        assert_eq!(AccentColor::parse("#FF6B6B").unwrap().as_str(), "#ff6b6b");
        assert_eq!(AccentColor::parse(" #4ec ").unwrap().as_str(), "#4ec");
    }

    #[test]
    fn test_accent_color_rejects_garbage() {
        for raw in ["", "FF6B6B", "#", "#12", "#12345", "#gggggg", "#1234567", "red"] {
            let err = AccentColor::parse(raw).unwrap_err();
            assert_eq!(err.field(), Some("accentColor"), "input {raw:?}");
        }
    }

    #[test]
    fn test_accent_color_deserializes_through_validation() {
        let color: AccentColor = serde_json::from_str("\"#9B59B6\"").unwrap();
        assert_eq!(color.to_string(), "#9b59b6");
        assert!(serde_json::from_str::<AccentColor>("\"purple\"").is_err());
    }

    #[test]
    fn test_public_profile_has_no_email() {
        let owner = OwnerProfile {
            id: 7,
            email: "owner@example.com".to_string(),
            username: "owner".to_string(),
            accent_color: Some("#3498db".to_string()),
            avatar_path: None,
        };
        let public = PublicProfile::from(owner);
        let json = serde_json::to_value(&public).unwrap();

        assert!(json.get("email").is_none());
        assert_eq!(json["username"], "owner");
        assert_eq!(json["accentColor"], "#3498db");
        assert!(json["avatarPath"].is_null());
    }
}
