//! Group member document model.
//!
//! # Responsibility
//! - Describe research-group members and the two sections they live in.
//!
//! # Invariants
//! - A member lives in exactly one section. Only the move operations transfer
//!   records between sections; nothing validates membership on load.
//! - `current_position` is meaningful for alumni only.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use super::Document;

/// One group member, current or former.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    /// Image filename; `None` lets the site render its placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// GitHub username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// NASA ADS profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ads: Option<String>,
    /// ORCID URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// One of the two named member collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Current,
    Alumni,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Alumni => "alumni",
        }
    }

    /// The section a move out of `self` lands in.
    pub fn other(self) -> Self {
        match self {
            Self::Current => Self::Alumni,
            Self::Alumni => Self::Current,
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole `group_members.yml` document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberDocument {
    #[serde(default)]
    pub current: Vec<Member>,
    #[serde(default)]
    pub alumni: Vec<Member>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl MemberDocument {
    pub fn section(&self, section: Section) -> &[Member] {
        match section {
            Section::Current => &self.current,
            Section::Alumni => &self.alumni,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut Vec<Member> {
        match section {
            Section::Current => &mut self.current,
            Section::Alumni => &mut self.alumni,
        }
    }
}

impl Document for MemberDocument {
    const KIND: &'static str = "members";

    fn record_count(&self) -> usize {
        self.current.len() + self.alumni.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Member, MemberDocument, Section};

    #[test]
    fn unknown_member_keys_survive_a_round_trip() {
        let source = "name: Ada\nrole: Postdoc\ndescription: d\nemail: a@b.c\npronouns: she/her\n";
        let member: Member = serde_yaml::from_str(source).unwrap();
        assert_eq!(member.image, None);

        let written = serde_yaml::to_string(&member).unwrap();
        assert!(written.contains("pronouns: she/her"));
        assert!(!written.contains("image"));
    }

    #[test]
    fn section_accessors_pick_the_named_collection() {
        let mut document = MemberDocument::default();
        document.section_mut(Section::Alumni).push(Member {
            name: "Grace".to_string(),
            ..Member::default()
        });

        assert!(document.section(Section::Current).is_empty());
        assert_eq!(document.section(Section::Alumni)[0].name, "Grace");
        assert_eq!(Section::Current.other(), Section::Alumni);
    }
}
