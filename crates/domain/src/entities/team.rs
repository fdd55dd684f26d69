//! Team composition with squad-capacity enforcement.

use std::collections::HashMap;

use crate::entities::Character;
use crate::flow::{Flow, FlowGrammar, NameIndex};
use crate::ids::CharacterId;
use crate::value_objects::{Member, Squad, TeamStructure};

/// One team: the fixed slot array, its occupancy bookkeeping, the raw
/// notation text, and the flow parsed from it.
///
/// # Invariants
///
/// - Front-line members occupy only indices `[0, front_bound)`; support
///   members only `[front_bound, slot_count)`.
/// - A character id appears in at most one slot.
/// - The reverse index and the squad counters agree with the slot array
///   after every operation; all three are updated inside the same call.
///
/// Roster mutations that cannot be honored (full squad, unknown member) are
/// silent no-ops so interactive "try to add" call patterns stay idempotent.
#[derive(Debug, Clone)]
pub struct Team {
    structure: TeamStructure,
    members: Vec<Member>,
    member_slots: HashMap<CharacterId, usize>,
    front_count: usize,
    support_count: usize,
    text: String,
    flow: Flow,
}

impl Team {
    /// An empty team laid out for the given structure.
    pub fn new(structure: TeamStructure) -> Self {
        Self {
            structure,
            members: vec![None; structure.slot_count()],
            member_slots: HashMap::new(),
            front_count: 0,
            support_count: 0,
            text: String::new(),
            flow: Flow::new(),
        }
    }

    /// Rebuild a team from a persisted slot array.
    ///
    /// The array is padded or truncated to the structure's slot count, so a
    /// file written under a different mode still loads. Occupancy counters
    /// are derived from slot position; a duplicated id keeps its first slot
    /// and later occurrences are cleared.
    pub fn with_members(structure: TeamStructure, members: Vec<Member>) -> Self {
        let mut slots = members;
        slots.resize(structure.slot_count(), None);

        let mut member_slots = HashMap::new();
        let mut front_count = 0;
        let mut support_count = 0;
        for (index, slot) in slots.iter_mut().enumerate() {
            let Some(id) = *slot else { continue };
            if member_slots.contains_key(&id) {
                *slot = None;
                continue;
            }
            member_slots.insert(id, index);
            match structure.squad_at(index) {
                Squad::FrontLine => front_count += 1,
                Squad::Support => support_count += 1,
            }
        }

        Self {
            structure,
            members: slots,
            member_slots,
            front_count,
            support_count,
            text: String::new(),
            flow: Flow::new(),
        }
    }

    pub fn structure(&self) -> TeamStructure {
        self.structure
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Number of occupied slots.
    pub fn member_count(&self) -> usize {
        self.member_slots.len()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn flow_mut(&mut self) -> &mut Flow {
        &mut self.flow
    }

    /// Re-parse this team's notation text into its flow.
    pub fn parse_flow(&mut self, names: &NameIndex) {
        self.flow = Flow::parse(&self.text, names);
    }

    /// Re-parse with an explicit grammar.
    pub fn parse_flow_with(&mut self, names: &NameIndex, grammar: FlowGrammar) {
        self.flow = Flow::parse_with(&self.text, names, grammar);
    }

    /// Place a character in the lowest-index empty slot of its squad's
    /// range. A full squad, an already-present character, or (defensively) a
    /// range without an empty slot all leave the team unchanged.
    pub fn add_member(&mut self, character: &Character) {
        if self.member_slots.contains_key(&character.id()) {
            return;
        }
        let squad = character.squad();
        if self.squad_count(squad) >= self.structure.capacity(squad) {
            return;
        }
        for index in self.structure.slot_range(squad) {
            if self.members[index].is_none() {
                self.members[index] = Some(character.id());
                self.member_slots.insert(character.id(), index);
                match squad {
                    Squad::FrontLine => self.front_count += 1,
                    Squad::Support => self.support_count += 1,
                }
                return;
            }
        }
    }

    /// Clear a member's slot. Unknown ids are a no-op.
    pub fn remove_member(&mut self, id: CharacterId) {
        let Some(index) = self.member_slots.remove(&id) else {
            return;
        };
        self.members[index] = None;
        match self.structure.squad_at(index) {
            Squad::FrontLine => self.front_count = self.front_count.saturating_sub(1),
            Squad::Support => self.support_count = self.support_count.saturating_sub(1),
        }
    }

    /// Remove the character if present, add it otherwise.
    pub fn toggle_member(&mut self, character: &Character) {
        if self.has_member(character.id()) {
            self.remove_member(character.id());
        } else {
            self.add_member(character);
        }
    }

    pub fn has_member(&self, id: CharacterId) -> bool {
        self.member_slots.contains_key(&id)
    }

    fn squad_count(&self, squad: Squad) -> usize {
        match squad {
            Squad::FrontLine => self.front_count,
            Squad::Support => self.support_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front(id: u32) -> Character {
        Character::new(CharacterId::new(id), format!("front-{id}"), Squad::FrontLine)
    }

    fn support(id: u32) -> Character {
        Character::new(CharacterId::new(id), format!("support-{id}"), Squad::Support)
    }

    #[test]
    fn test_members_fill_lowest_index_first_within_their_range() {
        let mut team = Team::new(TeamStructure::Normal);
        team.add_member(&front(1));
        team.add_member(&support(10));
        team.add_member(&front(2));
        assert_eq!(
            team.members(),
            &[
                Some(CharacterId::new(1)),
                Some(CharacterId::new(2)),
                None,
                None,
                Some(CharacterId::new(10)),
                None
            ]
        );
    }

    #[test]
    fn test_fifth_front_line_member_is_refused_on_normal() {
        let mut team = Team::new(TeamStructure::Normal);
        for id in 1..=4 {
            team.add_member(&front(id));
        }
        let members_before = team.members().to_vec();
        team.add_member(&front(5));
        assert!(!team.has_member(CharacterId::new(5)));
        assert_eq!(team.members(), members_before.as_slice());
    }

    #[test]
    fn test_third_support_member_is_refused_on_normal() {
        let mut team = Team::new(TeamStructure::Normal);
        team.add_member(&support(10));
        team.add_member(&support(11));
        team.add_member(&support(12));
        assert!(!team.has_member(CharacterId::new(12)));
        assert_eq!(team.member_count(), 2);
    }

    #[test]
    fn test_unrestrict_widens_both_squads() {
        let mut team = Team::new(TeamStructure::Unrestrict);
        for id in 1..=6 {
            team.add_member(&front(id));
        }
        for id in 10..=13 {
            team.add_member(&support(id));
        }
        assert_eq!(team.member_count(), 10);
        team.add_member(&front(7));
        team.add_member(&support(14));
        assert_eq!(team.member_count(), 10);
    }

    #[test]
    fn test_support_members_never_occupy_front_line_slots() {
        let mut team = Team::new(TeamStructure::Normal);
        team.add_member(&support(10));
        let bound = team.structure().front_bound();
        assert!(team.members()[..bound].iter().all(Option::is_none));
        assert_eq!(team.members()[bound], Some(CharacterId::new(10)));
    }

    #[test]
    fn test_adding_the_same_character_twice_keeps_one_slot() {
        let mut team = Team::new(TeamStructure::Normal);
        team.add_member(&front(1));
        team.add_member(&front(1));
        let occupied: Vec<_> = team.members().iter().flatten().collect();
        assert_eq!(occupied.len(), 1);
    }

    #[test]
    fn test_remove_frees_capacity_for_a_new_member() {
        let mut team = Team::new(TeamStructure::Normal);
        team.add_member(&support(10));
        team.add_member(&support(11));
        team.remove_member(CharacterId::new(10));
        assert!(!team.has_member(CharacterId::new(10)));
        team.add_member(&support(12));
        assert!(team.has_member(CharacterId::new(12)));
        // The freed slot is the lowest-index empty one again.
        assert_eq!(team.members()[4], Some(CharacterId::new(12)));
    }

    #[test]
    fn test_remove_works_on_a_full_team() {
        let mut team = Team::new(TeamStructure::Normal);
        for id in 1..=4 {
            team.add_member(&front(id));
        }
        team.add_member(&support(10));
        team.add_member(&support(11));
        assert_eq!(team.member_count(), 6);
        team.remove_member(CharacterId::new(3));
        assert!(!team.has_member(CharacterId::new(3)));
        assert_eq!(team.member_count(), 5);
    }

    #[test]
    fn test_toggle_round_trips() {
        let mut team = Team::new(TeamStructure::Normal);
        let character = front(1);
        team.toggle_member(&character);
        assert!(team.has_member(character.id()));
        team.toggle_member(&character);
        assert!(!team.has_member(character.id()));
    }

    #[test]
    fn test_with_members_derives_counters() {
        let members = vec![
            Some(CharacterId::new(1)),
            Some(CharacterId::new(2)),
            Some(CharacterId::new(3)),
            Some(CharacterId::new(4)),
            Some(CharacterId::new(10)),
            None,
        ];
        let mut team = Team::with_members(TeamStructure::Normal, members);
        assert_eq!(team.member_count(), 5);
        // Front-line range is full, so another front-line add is refused.
        team.add_member(&front(5));
        assert!(!team.has_member(CharacterId::new(5)));
        // One support slot is still open.
        team.add_member(&support(11));
        assert!(team.has_member(CharacterId::new(11)));
    }

    #[test]
    fn test_with_members_pads_and_truncates_to_the_structure() {
        let short = Team::with_members(TeamStructure::Unrestrict, vec![Some(CharacterId::new(1))]);
        assert_eq!(short.members().len(), 10);
        let long = Team::with_members(
            TeamStructure::Normal,
            (1..=10).map(|id| Some(CharacterId::new(id))).collect(),
        );
        assert_eq!(long.members().len(), 6);
        assert_eq!(long.member_count(), 6);
    }

    #[test]
    fn test_with_members_clears_duplicate_ids() {
        let team = Team::with_members(
            TeamStructure::Normal,
            vec![
                Some(CharacterId::new(1)),
                Some(CharacterId::new(1)),
                None,
                None,
                None,
                None,
            ],
        );
        assert_eq!(team.member_count(), 1);
        assert_eq!(team.members()[1], None);
    }
}
