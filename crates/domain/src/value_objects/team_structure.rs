//! Capacity layouts for team slot arrays.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::Squad;

/// Capacity layout selecting how many slots a team has and how they are
/// split between the two squads.
///
/// Front-line members occupy indices `[0, front_bound)` and support members
/// `[front_bound, slot_count)`; both bounds depend only on the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStructure {
    /// 4 front-line + 2 support.
    #[default]
    Normal,
    /// 6 front-line + 4 support.
    Unrestrict,
}

impl TeamStructure {
    /// First slot index reserved for support members.
    pub fn front_bound(&self) -> usize {
        match self {
            TeamStructure::Normal => 4,
            TeamStructure::Unrestrict => 6,
        }
    }

    /// Total number of slots.
    pub fn slot_count(&self) -> usize {
        match self {
            TeamStructure::Normal => 6,
            TeamStructure::Unrestrict => 10,
        }
    }

    /// Maximum members of the given squad this structure admits.
    pub fn capacity(&self, squad: Squad) -> usize {
        match squad {
            Squad::FrontLine => self.front_bound(),
            Squad::Support => self.slot_count() - self.front_bound(),
        }
    }

    /// Slot index range eligible for the given squad.
    pub fn slot_range(&self, squad: Squad) -> Range<usize> {
        match squad {
            Squad::FrontLine => 0..self.front_bound(),
            Squad::Support => self.front_bound()..self.slot_count(),
        }
    }

    /// Squad implied by a slot index.
    pub fn squad_at(&self, index: usize) -> Squad {
        if index < self.front_bound() {
            Squad::FrontLine
        } else {
            Squad::Support
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_layout() {
        let structure = TeamStructure::Normal;
        assert_eq!(structure.front_bound(), 4);
        assert_eq!(structure.slot_count(), 6);
        assert_eq!(structure.capacity(Squad::FrontLine), 4);
        assert_eq!(structure.capacity(Squad::Support), 2);
        assert_eq!(structure.slot_range(Squad::Support), 4..6);
    }

    #[test]
    fn test_unrestrict_layout() {
        let structure = TeamStructure::Unrestrict;
        assert_eq!(structure.front_bound(), 6);
        assert_eq!(structure.slot_count(), 10);
        assert_eq!(structure.capacity(Squad::FrontLine), 6);
        assert_eq!(structure.capacity(Squad::Support), 4);
        assert_eq!(structure.slot_range(Squad::FrontLine), 0..6);
    }

    #[test]
    fn test_squad_at_boundary() {
        assert_eq!(TeamStructure::Normal.squad_at(3), Squad::FrontLine);
        assert_eq!(TeamStructure::Normal.squad_at(4), Squad::Support);
        assert_eq!(TeamStructure::Unrestrict.squad_at(5), Squad::FrontLine);
        assert_eq!(TeamStructure::Unrestrict.squad_at(6), Squad::Support);
    }
}
