use super::{Group, GroupId, MemberId, Roster};

/// Outcome of a drag gesture. `NotFound` covers every malformed reference:
/// unknown group, unknown member, out-of-range source index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    Cancelled,
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveTarget {
    pub group_id: GroupId,
    pub index: usize,
}

/// The resolved outcome of one drag: where the member started, where it was
/// dropped (`None` when the drag was cancelled or dropped outside any valid
/// target), and which member the gesture picked up.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveGesture {
    pub source_group_id: GroupId,
    pub source_index: usize,
    pub destination: Option<MoveTarget>,
    pub member_id: MemberId,
}

/// Translates a drag gesture into a new roster snapshot.
///
/// Both paths remove before inserting, which is what keeps membership
/// exclusive: at no point does the member exist in two positions. A gesture
/// that references nothing resolvable returns the roster unchanged rather
/// than failing, so a stale drag from the UI can never take the session down.
pub fn apply_move(
    roster: &Roster,
    gesture: &MoveGesture,
) -> (Roster, MoveOutcome) {
    let Some(target) = &gesture.destination else {
        return (roster.clone(), MoveOutcome::Cancelled);
    };

    if gesture.source_group_id == target.group_id {
        reorder_within_group(
            roster,
            &gesture.source_group_id,
            gesture.source_index,
            target.index,
        )
    } else {
        transfer_between_groups(
            roster,
            &gesture.source_group_id,
            &gesture.member_id,
            target,
        )
    }
}

/// Remove-then-insert list move. The destination index is interpreted
/// against the sequence *after* removal, so dragging an item past itself
/// collapses the way drag lists do.
fn reorder_within_group(
    roster: &Roster,
    group_id: &GroupId,
    source_index: usize,
    destination_index: usize,
) -> (Roster, MoveOutcome) {
    let Some(group) = roster.find_group(group_id) else {
        return (roster.clone(), MoveOutcome::NotFound);
    };
    if source_index >= group.members.len() {
        return (roster.clone(), MoveOutcome::NotFound);
    }

    let mut members = group.members.clone();
    let moved = members.remove(source_index);
    let index = destination_index.min(members.len());
    members.insert(index, moved);

    let groups = roster
        .groups()
        .iter()
        .map(|g| {
            if &g.id == group_id {
                Group {
                    id: g.id,
                    name: g.name.clone(),
                    members: members.clone(),
                }
            } else {
                g.clone()
            }
        })
        .collect();
    (Roster::from_groups(groups), MoveOutcome::Applied)
}

fn transfer_between_groups(
    roster: &Roster,
    source_group_id: &GroupId,
    member_id: &MemberId,
    target: &MoveTarget,
) -> (Roster, MoveOutcome) {
    if roster.find_group(&target.group_id).is_none() {
        return (roster.clone(), MoveOutcome::NotFound);
    }
    let Some(moved) = roster
        .find_group(source_group_id)
        .and_then(|g| g.find_member(member_id))
        .cloned()
    else {
        return (roster.clone(), MoveOutcome::NotFound);
    };

    let groups = roster
        .groups()
        .iter()
        .map(|g| {
            if &g.id == source_group_id {
                let members = g
                    .members
                    .iter()
                    .filter(|m| &m.id != member_id)
                    .cloned()
                    .collect();
                Group {
                    id: g.id,
                    name: g.name.clone(),
                    members,
                }
            } else if g.id == target.group_id {
                let mut members = g.members.clone();
                let index = target.index.min(members.len());
                members.insert(index, moved.clone());
                Group {
                    id: g.id,
                    name: g.name.clone(),
                    members,
                }
            } else {
                g.clone()
            }
        })
        .collect();
    (Roster::from_groups(groups), MoveOutcome::Applied)
}
