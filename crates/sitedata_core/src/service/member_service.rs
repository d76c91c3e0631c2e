//! Group member use-case service.
//!
//! # Responsibility
//! - Add, edit and remove members within one section.
//! - Move members between the current and alumni sections.
//!
//! # Invariants
//! - Moves pop from one section and append to the other, so a member is
//!   never present in both.
//! - Moving to alumni prefixes the role with `Former ` and records the
//!   current position; moving back drops the position and sets a new role.

use crate::model::member::{Member, MemberDocument, Section};
use crate::repo::document_repo::{DocumentRepository, RepoResult};
use crate::service::selection::check_index;
use crate::service::{non_blank, replace_if_given, replace_optional_if_given, ServiceResult};
use log::info;

/// Role prefix applied when a member becomes an alumnus.
pub const FORMER_ROLE_PREFIX: &str = "Former ";

/// Structured input for a new member.
///
/// Blank optional fields are omitted from the stored record. Required fields
/// are stored as given, even when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub role: String,
    pub image: String,
    pub description: String,
    pub email: String,
    pub website: String,
    pub github: String,
    pub ads: String,
    pub orcid: String,
    /// Used for the alumni section only.
    pub current_position: String,
}

impl MemberDraft {
    fn into_member(self, section: Section) -> Member {
        let current_position = match section {
            Section::Alumni => non_blank(&self.current_position),
            Section::Current => None,
        };
        Member {
            name: self.name,
            role: self.role,
            image: non_blank(&self.image),
            description: self.description,
            email: self.email,
            website: non_blank(&self.website),
            github: non_blank(&self.github),
            ads: non_blank(&self.ads),
            orcid: non_blank(&self.orcid),
            current_position,
            ..Member::default()
        }
    }
}

/// Raw edit responses, one per prompted field. Blank means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberEdit {
    pub name: String,
    pub role: String,
    pub image: String,
    pub description: String,
    pub email: String,
    pub website: String,
    pub github: String,
    pub ads: String,
    pub orcid: String,
    /// Applied to alumni only.
    pub current_position: String,
}

impl MemberEdit {
    /// Applies the responses to `member`, which lives in `section`.
    pub fn apply(&self, member: &mut Member, section: Section) {
        replace_if_given(&mut member.name, &self.name);
        replace_if_given(&mut member.role, &self.role);
        replace_optional_if_given(&mut member.image, &self.image);
        replace_if_given(&mut member.description, &self.description);
        replace_if_given(&mut member.email, &self.email);
        replace_optional_if_given(&mut member.website, &self.website);
        replace_optional_if_given(&mut member.github, &self.github);
        replace_optional_if_given(&mut member.ads, &self.ads);
        replace_optional_if_given(&mut member.orcid, &self.orcid);
        if section == Section::Alumni {
            replace_optional_if_given(&mut member.current_position, &self.current_position);
        }
    }
}

/// Member service facade owning the live member document.
pub struct MemberService<R: DocumentRepository<MemberDocument>> {
    repo: R,
    document: MemberDocument,
}

impl<R: DocumentRepository<MemberDocument>> MemberService<R> {
    /// Loads the document through `repo` and takes ownership of both.
    pub fn open(repo: R) -> RepoResult<Self> {
        let document = repo.load()?;
        Ok(Self { repo, document })
    }

    pub fn with_document(repo: R, document: MemberDocument) -> Self {
        Self { repo, document }
    }

    pub fn document(&self) -> &MemberDocument {
        &self.document
    }

    pub fn members(&self, section: Section) -> &[Member] {
        self.document.section(section)
    }

    /// Appends a new member to `section`.
    pub fn add_member(&mut self, section: Section, draft: MemberDraft) -> &Member {
        let members = self.document.section_mut(section);
        members.push(draft.into_member(section));
        info!(
            "event=member_add module=service status=ok section={section} members={}",
            members.len()
        );
        let last = members.len() - 1;
        &members[last]
    }

    /// Applies `edit` to the member at `index` of `section`.
    pub fn edit_member(
        &mut self,
        section: Section,
        index: usize,
        edit: &MemberEdit,
    ) -> ServiceResult<&Member> {
        let members = self.document.section_mut(section);
        let index = check_index(index, members.len())?;
        let member = &mut members[index];
        edit.apply(member, section);
        info!("event=member_edit module=service status=ok section={section} index={index}");
        Ok(member)
    }

    /// Removes and returns the member at `index` of `section`.
    pub fn remove_member(&mut self, section: Section, index: usize) -> ServiceResult<Member> {
        let members = self.document.section_mut(section);
        let index = check_index(index, members.len())?;
        let removed = members.remove(index);
        info!(
            "event=member_remove module=service status=ok section={section} index={index} members={}",
            members.len()
        );
        Ok(removed)
    }

    /// Moves a current member to the alumni section.
    pub fn move_to_alumni(
        &mut self,
        index: usize,
        current_position: &str,
    ) -> ServiceResult<&Member> {
        let index = check_index(index, self.document.current.len())?;
        let mut member = self.document.current.remove(index);
        member.role = format!("{FORMER_ROLE_PREFIX}{}", member.role);
        member.current_position = Some(current_position.trim().to_string());
        Ok(self.append_moved(Section::Alumni, member))
    }

    /// Moves an alumnus back to the current section under `new_role`.
    pub fn move_to_current(&mut self, index: usize, new_role: &str) -> ServiceResult<&Member> {
        let index = check_index(index, self.document.alumni.len())?;
        let mut member = self.document.alumni.remove(index);
        member.role = new_role.trim().to_string();
        member.current_position = None;
        Ok(self.append_moved(Section::Current, member))
    }

    fn append_moved(&mut self, target: Section, member: Member) -> &Member {
        let members = self.document.section_mut(target);
        members.push(member);
        info!(
            "event=member_move module=service status=ok from={} to={target}",
            target.other()
        );
        let last = members.len() - 1;
        &members[last]
    }

    /// Serialized form of the live document, as `save` would write it.
    pub fn render(&self) -> RepoResult<String> {
        self.repo.render(&self.document)
    }

    /// Writes the live document to the backing file.
    pub fn save(&self) -> RepoResult<()> {
        self.repo.save(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberDraft, MemberEdit};
    use crate::model::member::{Member, Section};

    #[test]
    fn draft_omits_blank_optionals_and_keeps_blank_required_fields() {
        let member = MemberDraft {
            name: "Ada".to_string(),
            role: "PhD Student".to_string(),
            current_position: "Ignored".to_string(),
            ..MemberDraft::default()
        }
        .into_member(Section::Current);

        assert_eq!(member.email, "");
        assert_eq!(member.image, None);
        assert_eq!(member.website, None);
        assert_eq!(member.current_position, None);
    }

    #[test]
    fn current_position_edit_is_ignored_outside_alumni() {
        let mut member = Member {
            name: "Ada".to_string(),
            ..Member::default()
        };
        let edit = MemberEdit {
            current_position: "Professor".to_string(),
            ..MemberEdit::default()
        };

        edit.apply(&mut member, Section::Current);
        assert_eq!(member.current_position, None);

        edit.apply(&mut member, Section::Alumni);
        assert_eq!(member.current_position.as_deref(), Some("Professor"));
    }
}
