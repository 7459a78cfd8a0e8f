use crate::domain::{
    apply_move, Group, GroupId, Member, MemberId, MoveGesture, MoveOutcome,
    Roster, RosterStore, RosterStoreError,
};

/// Holds the live roster for one session. Transitions delegate to the pure
/// copy-on-write operations on [`Roster`]; a `NotFound` outcome is collapsed
/// to returning the unchanged snapshot, matching the silent no-op contract.
#[derive(Default)]
pub struct InMemoryRosterStore {
    roster: Roster,
}

impl InMemoryRosterStore {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

#[async_trait::async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn snapshot(&self) -> Roster {
        self.roster.clone()
    }

    #[tracing::instrument(name = "Adding group to roster store", skip_all)]
    async fn add_group(&mut self) -> Result<Roster, RosterStoreError> {
        self.roster = self.roster.add_group();
        Ok(self.roster.clone())
    }

    #[tracing::instrument(name = "Deleting group from roster store", skip_all)]
    async fn delete_group(
        &mut self,
        group_id: &GroupId,
    ) -> Result<Roster, RosterStoreError> {
        let (roster, outcome) = self.roster.delete_group(group_id);
        tracing::debug!(?outcome, "delete_group");
        self.roster = roster;
        Ok(self.roster.clone())
    }

    #[tracing::instrument(name = "Updating group in roster store", skip_all)]
    async fn update_group(
        &mut self,
        group: Group,
    ) -> Result<Roster, RosterStoreError> {
        let (roster, outcome) = self.roster.update_group(group);
        tracing::debug!(?outcome, "update_group");
        self.roster = roster;
        Ok(self.roster.clone())
    }

    #[tracing::instrument(name = "Adding member to roster store", skip_all)]
    async fn add_member(
        &mut self,
        group_id: &GroupId,
    ) -> Result<Roster, RosterStoreError> {
        let (roster, outcome) = self.roster.add_member(group_id);
        tracing::debug!(?outcome, "add_member");
        self.roster = roster;
        Ok(self.roster.clone())
    }

    #[tracing::instrument(name = "Updating member in roster store", skip_all)]
    async fn update_member(
        &mut self,
        group_id: &GroupId,
        member_id: &MemberId,
        member: Member,
    ) -> Result<Roster, RosterStoreError> {
        let (roster, outcome) =
            self.roster.update_member(group_id, member_id, member);
        tracing::debug!(?outcome, "update_member");
        self.roster = roster;
        Ok(self.roster.clone())
    }

    #[tracing::instrument(name = "Deleting member from roster store", skip_all)]
    async fn delete_member(
        &mut self,
        group_id: &GroupId,
        member_id: &MemberId,
    ) -> Result<Roster, RosterStoreError> {
        let (roster, outcome) = self.roster.delete_member(group_id, member_id);
        tracing::debug!(?outcome, "delete_member");
        self.roster = roster;
        Ok(self.roster.clone())
    }

    #[tracing::instrument(name = "Applying move gesture", skip_all)]
    async fn move_member(
        &mut self,
        gesture: &MoveGesture,
    ) -> Result<Roster, RosterStoreError> {
        let (roster, outcome) = apply_move(&self.roster, gesture);
        if outcome == MoveOutcome::NotFound {
            tracing::debug!(?gesture, "move gesture referenced unknown ids");
        }
        self.roster = roster;
        Ok(self.roster.clone())
    }

    #[tracing::instrument(name = "Replacing roster wholesale", skip_all)]
    async fn replace(
        &mut self,
        roster: Roster,
    ) -> Result<Roster, RosterStoreError> {
        self.roster = roster;
        Ok(self.roster.clone())
    }
}
