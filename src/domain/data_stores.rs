use color_eyre::eyre::Report;
use thiserror::Error;

use super::{Group, GroupId, Member, MemberId, MoveGesture, ParseError, Roster};

/// The single mutable source of truth for one session's roster. Every
/// mutation returns the new snapshot; unknown group/member ids are silent
/// no-ops that return the snapshot unchanged, never errors.
#[async_trait::async_trait]
pub trait RosterStore {
    async fn snapshot(&self) -> Roster;
    async fn add_group(&mut self) -> Result<Roster, RosterStoreError>;
    async fn delete_group(
        &mut self,
        group_id: &GroupId,
    ) -> Result<Roster, RosterStoreError>;
    async fn update_group(
        &mut self,
        group: Group,
    ) -> Result<Roster, RosterStoreError>;
    async fn add_member(
        &mut self,
        group_id: &GroupId,
    ) -> Result<Roster, RosterStoreError>;
    async fn update_member(
        &mut self,
        group_id: &GroupId,
        member_id: &MemberId,
        member: Member,
    ) -> Result<Roster, RosterStoreError>;
    async fn delete_member(
        &mut self,
        group_id: &GroupId,
        member_id: &MemberId,
    ) -> Result<Roster, RosterStoreError>;
    async fn move_member(
        &mut self,
        gesture: &MoveGesture,
    ) -> Result<Roster, RosterStoreError>;
    /// Wholesale replacement, used by import and session restore.
    async fn replace(
        &mut self,
        roster: Roster,
    ) -> Result<Roster, RosterStoreError>;
}

#[derive(Debug, Error)]
pub enum RosterStoreError {
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for RosterStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Session-local mirror of the roster, written only on an explicit save
/// action. The browser analogue is a localStorage entry under a fixed key.
#[async_trait::async_trait]
pub trait SessionStore {
    async fn persist(
        &mut self,
        roster: &Roster,
    ) -> Result<(), SessionStoreError>;
    async fn restore(&self) -> Result<Roster, SessionStoreError>;
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("No saved roster")]
    NoSavedRoster,
    #[error("Saved roster is malformed")]
    ParseError(#[from] ParseError),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NoSavedRoster, Self::NoSavedRoster)
                | (Self::ParseError(_), Self::ParseError(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
