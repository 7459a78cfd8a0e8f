use serde::{Deserialize, Serialize};

use super::{GroupId, Member, MemberId};

/// A named, ordered collection of members. Member order is meaningful (it
/// drives display and drag positions) and membership is exclusive across
/// groups; the roster transitions in [`super::Roster`] maintain both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<Member>,
}

impl Group {
    pub fn new(name: String) -> Self {
        Self {
            id: GroupId::default(),
            name,
            members: Vec::new(),
        }
    }

    pub fn find_member(&self, member_id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == member_id)
    }

    pub fn contains_member(&self, member_id: &MemberId) -> bool {
        self.find_member(member_id).is_some()
    }
}
