//! Edit Coordinator
//!
//! At most one member is edited at a time. The dialog works on a private
//! copy; the grid keeps showing the original row until the backend accepts
//! the change and the page is re-fetched.

use std::cell::RefCell;

use crate::api::MemberApi;
use crate::error::{AppError, AppResult};
use crate::models::Member;
use crate::toast::ToastBus;

const UPDATE_FAILED: &str = "Failed to update member.";

/// Editable member attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    FirstName,
    MiddleName,
    LastName,
    BusinessUnit,
    Country,
    SourceMemberId,
}

impl MemberField {
    pub const ALL: [MemberField; 6] = [
        MemberField::FirstName,
        MemberField::MiddleName,
        MemberField::LastName,
        MemberField::BusinessUnit,
        MemberField::Country,
        MemberField::SourceMemberId,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MemberField::FirstName => "First Name",
            MemberField::MiddleName => "Middle Name",
            MemberField::LastName => "Last Name",
            MemberField::BusinessUnit => "Business Unit",
            MemberField::Country => "Country",
            MemberField::SourceMemberId => "Source Member ID",
        }
    }

    pub fn required(self) -> bool {
        self != MemberField::MiddleName
    }

    pub fn get(self, member: &Member) -> &str {
        match self {
            MemberField::FirstName => &member.first_name,
            MemberField::MiddleName => &member.middle_name,
            MemberField::LastName => &member.last_name,
            MemberField::BusinessUnit => &member.business_unit,
            MemberField::Country => &member.country,
            MemberField::SourceMemberId => &member.source_member_id,
        }
    }

    fn slot(self, member: &mut Member) -> &mut String {
        match self {
            MemberField::FirstName => &mut member.first_name,
            MemberField::MiddleName => &mut member.middle_name,
            MemberField::LastName => &mut member.last_name,
            MemberField::BusinessUnit => &mut member.business_unit,
            MemberField::Country => &mut member.country,
            MemberField::SourceMemberId => &mut member.source_member_id,
        }
    }
}

/// The row being edited and its working copy
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    id: u64,
    original: Member,
    pub draft: Member,
}

impl EditSession {
    pub fn original(&self) -> &Member {
        &self.original
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditCoordinator {
    session: Option<EditSession>,
    /// Session whose save is in flight
    saving: Option<u64>,
    opened: u64,
}

/// Payload handed out by `begin_save`, tied to the session it came from
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    pub session: u64,
    pub member: Member,
}

impl EditCoordinator {
    /// Start editing a copy of `member`, replacing any open session
    pub fn open(&mut self, member: &Member) {
        log::debug!("[EDIT] open member {}", member.id);
        self.opened += 1;
        self.session = Some(EditSession {
            id: self.opened,
            original: member.clone(),
            draft: member.clone(),
        });
        self.saving = None;
    }

    pub fn cancel(&mut self) {
        self.session = None;
        self.saving = None;
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the open session has a save in flight
    pub fn is_saving(&self) -> bool {
        matches!((&self.session, self.saving), (Some(session), Some(id)) if session.id == id)
    }

    pub fn set_field(&mut self, field: MemberField, value: String) {
        if let Some(session) = self.session.as_mut() {
            *field.slot(&mut session.draft) = value;
        }
    }

    pub fn set_entitled(&mut self, entitled: bool) {
        if let Some(session) = self.session.as_mut() {
            session.draft.entitled = Some(entitled);
        }
    }

    /// Labels of required fields left blank in the draft
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        MemberField::ALL
            .into_iter()
            .filter(|f| f.required() && f.get(&session.draft).trim().is_empty())
            .map(MemberField::label)
            .collect()
    }

    /// Check the draft and hand out the payload to send
    pub fn begin_save(&mut self) -> AppResult<PendingSave> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| AppError::InvalidMember("No member is being edited".to_string()))?;
        if session.draft.id <= 0 {
            return Err(AppError::InvalidMember("Member has no valid id".to_string()));
        }
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::InvalidMember(format!("{} is required", missing.join(", "))));
        }
        let pending = PendingSave {
            session: session.id,
            member: session.draft.clone(),
        };
        self.saving = Some(pending.session);
        Ok(pending)
    }

    /// Close on success; keep the session open on failure.
    ///
    /// Results for a session that was cancelled or replaced meanwhile leave
    /// the current session alone.
    pub fn finish_save(&mut self, session: u64, result: &AppResult<Member>) {
        if self.saving == Some(session) {
            self.saving = None;
        }
        let current = self.session.as_ref().map(|s| s.id);
        if current != Some(session) {
            log::debug!("[EDIT] ignoring late save for session {}", session);
            return;
        }
        if result.is_ok() {
            self.session = None;
        }
    }
}

/// Somewhere the `EditCoordinator` lives
pub trait EditCell {
    fn update_editor<R>(&self, f: impl FnOnce(&mut EditCoordinator) -> R) -> R;
}

impl EditCell for RefCell<EditCoordinator> {
    fn update_editor<R>(&self, f: impl FnOnce(&mut EditCoordinator) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Persist the open draft.
///
/// On success the session is closed and the caller should refresh the
/// current results page. Failures leave the session open and are reported
/// through the toast bus; nothing is retried.
pub async fn save<A, C>(api: &A, editor: &C, toasts: &ToastBus) -> AppResult<Member>
where
    A: MemberApi + ?Sized,
    C: EditCell + ?Sized,
{
    let result = match editor.update_editor(EditCoordinator::begin_save) {
        Ok(PendingSave { session, member }) => {
            let result = api.update_member(member.id, &member).await;
            editor.update_editor(|e| e.finish_save(session, &result));
            result
        }
        Err(err) => Err(err),
    };

    match &result {
        Ok(saved) => {
            log::info!("[EDIT] member {} updated", saved.id);
            toasts.success("Member updated", None);
        }
        Err(err) => {
            log::error!("[EDIT] update failed: {}", err);
            toasts.error(err.user_message(UPDATE_FAILED), None);
        }
    }
    result
}
