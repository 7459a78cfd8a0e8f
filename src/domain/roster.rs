use serde::{Deserialize, Serialize};

use super::{Group, GroupId, Member, MemberId};

/// Whether a transition changed anything. The public surface collapses
/// `NotFound` to "return the unchanged snapshot"; keeping the distinction
/// here lets tests tell a deliberate no-op from a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NotFound,
}

/// The full ordered collection of groups held by one session.
///
/// Serializes as the bare JSON array of groups, which is also the file
/// format for export/import.
///
/// Every transition takes `&self` and returns a fresh `Roster`; no group or
/// member reachable from a previous snapshot is ever mutated in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    groups: Vec<Group>,
}

impl Roster {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn find_group(&self, group_id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == group_id)
    }

    /// Appends a group named `Group {n+1}` with no members.
    pub fn add_group(&self) -> Roster {
        let mut groups = self.groups.clone();
        groups.push(Group::new(format!("Group {}", self.groups.len() + 1)));
        Roster { groups }
    }

    pub fn delete_group(&self, group_id: &GroupId) -> (Roster, Outcome) {
        if self.find_group(group_id).is_none() {
            return (self.clone(), Outcome::NotFound);
        }
        let groups = self
            .groups
            .iter()
            .filter(|g| &g.id != group_id)
            .cloned()
            .collect();
        (Roster { groups }, Outcome::Applied)
    }

    /// Wholesale replacement of the group matching `updated.id`, members
    /// included. Name emptiness is deliberately not checked.
    pub fn update_group(&self, updated: Group) -> (Roster, Outcome) {
        if self.find_group(&updated.id).is_none() {
            return (self.clone(), Outcome::NotFound);
        }
        let groups = self
            .groups
            .iter()
            .map(|g| {
                if g.id == updated.id {
                    updated.clone()
                } else {
                    g.clone()
                }
            })
            .collect();
        (Roster { groups }, Outcome::Applied)
    }

    /// Appends a member named `Member {n+1}` with default constraints to
    /// the named group.
    pub fn add_member(&self, group_id: &GroupId) -> (Roster, Outcome) {
        self.map_group(group_id, |group| {
            let mut members = group.members.clone();
            members.push(Member::new(format!(
                "Member {}",
                group.members.len() + 1
            )));
            Group {
                id: group.id,
                name: group.name.clone(),
                members,
            }
        })
    }

    /// Wholesale replacement of the member matching `member_id` in the
    /// named group.
    pub fn update_member(
        &self,
        group_id: &GroupId,
        member_id: &MemberId,
        updated: Member,
    ) -> (Roster, Outcome) {
        match self.find_group(group_id) {
            Some(group) if group.contains_member(member_id) => {}
            _ => return (self.clone(), Outcome::NotFound),
        }
        self.map_group(group_id, |group| {
            let members = group
                .members
                .iter()
                .map(|m| {
                    if &m.id == member_id {
                        updated.clone()
                    } else {
                        m.clone()
                    }
                })
                .collect();
            Group {
                id: group.id,
                name: group.name.clone(),
                members,
            }
        })
    }

    pub fn delete_member(
        &self,
        group_id: &GroupId,
        member_id: &MemberId,
    ) -> (Roster, Outcome) {
        match self.find_group(group_id) {
            Some(group) if group.contains_member(member_id) => {}
            _ => return (self.clone(), Outcome::NotFound),
        }
        self.map_group(group_id, |group| {
            let members = group
                .members
                .iter()
                .filter(|m| &m.id != member_id)
                .cloned()
                .collect();
            Group {
                id: group.id,
                name: group.name.clone(),
                members,
            }
        })
    }

    /// Re-applies the sorted/unique day-list invariant after roster data
    /// crosses a trust boundary (file import, session restore).
    pub fn normalize_days(mut self) -> Roster {
        for group in &mut self.groups {
            for member in &mut group.members {
                member.normalize_days();
            }
        }
        self
    }

    fn map_group<F>(&self, group_id: &GroupId, f: F) -> (Roster, Outcome)
    where
        F: Fn(&Group) -> Group,
    {
        if self.find_group(group_id).is_none() {
            return (self.clone(), Outcome::NotFound);
        }
        let groups = self
            .groups
            .iter()
            .map(|g| if &g.id == group_id { f(g) } else { g.clone() })
            .collect();
        (Roster { groups }, Outcome::Applied)
    }
}
