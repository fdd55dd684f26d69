//! Character records from the game's roster.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;
use crate::value_objects::Squad;

/// A playable character as supplied by the external roster store.
///
/// The core never mutates characters. Parsing reads `name`, `aliases` and
/// `squad`; the remaining attributes are cosmetic build data read only by the
/// description generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: CharacterId,
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    squad: Squad,

    // Build attributes for the description generator.
    star: u32,
    level: u32,
    #[serde(default)]
    weapon_level: Option<u32>,
    gear_1: u32,
    gear_2: u32,
    gear_3: u32,
    #[serde(default)]
    gear_unique: Option<u32>,
    skill_ex: u32,
    skill_n: u32,
    skill_p: u32,
    skill_sub: u32,
    #[serde(default)]
    release_hp: Option<u32>,
    #[serde(default)]
    release_atk: Option<u32>,
    #[serde(default)]
    release_heal: Option<u32>,
}

impl Character {
    /// Create a character with a fresh (unraised) build.
    pub fn new(id: CharacterId, name: impl Into<String>, squad: Squad) -> Self {
        Self {
            id,
            name: name.into(),
            aliases: Vec::new(),
            squad,
            star: 1,
            level: 1,
            weapon_level: None,
            gear_1: 1,
            gear_2: 1,
            gear_3: 1,
            gear_unique: None,
            skill_ex: 1,
            skill_n: 1,
            skill_p: 1,
            skill_sub: 1,
            release_hp: None,
            release_atk: None,
            release_heal: None,
        }
    }

    // ──────────────────────────────────────────────────────────────────────
    // Builder-style methods
    // ──────────────────────────────────────────────────────────────────────

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Star rating; values above 5 count as unique-weapon stars.
    pub fn with_star(mut self, star: u32) -> Self {
        self.star = star;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_weapon_level(mut self, weapon_level: u32) -> Self {
        self.weapon_level = Some(weapon_level);
        self
    }

    /// Skill levels in notation order: EX, normal, passive, sub.
    pub fn with_skills(mut self, ex: u32, normal: u32, passive: u32, sub: u32) -> Self {
        self.skill_ex = ex;
        self.skill_n = normal;
        self.skill_p = passive;
        self.skill_sub = sub;
        self
    }

    pub fn with_gear(mut self, gear_1: u32, gear_2: u32, gear_3: u32) -> Self {
        self.gear_1 = gear_1;
        self.gear_2 = gear_2;
        self.gear_3 = gear_3;
        self
    }

    pub fn with_unique_gear(mut self, tier: u32) -> Self {
        self.gear_unique = Some(tier);
        self
    }

    pub fn with_releases(mut self, hp: u32, atk: u32, heal: u32) -> Self {
        self.release_hp = Some(hp);
        self.release_atk = Some(atk);
        self.release_heal = Some(heal);
        self
    }

    // ──────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn squad(&self) -> Squad {
        self.squad
    }

    pub fn star(&self) -> u32 {
        self.star
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn weapon_level(&self) -> Option<u32> {
        self.weapon_level
    }

    pub fn gear(&self) -> (u32, u32, u32) {
        (self.gear_1, self.gear_2, self.gear_3)
    }

    pub fn gear_unique(&self) -> Option<u32> {
        self.gear_unique
    }

    pub fn skill_ex(&self) -> u32 {
        self.skill_ex
    }

    pub fn skill_n(&self) -> u32 {
        self.skill_n
    }

    pub fn skill_p(&self) -> u32 {
        self.skill_p
    }

    pub fn skill_sub(&self) -> u32 {
        self.skill_sub
    }

    pub fn releases(&self) -> (u32, u32, u32) {
        (
            self.release_hp.unwrap_or(0),
            self.release_atk.unwrap_or(0),
            self.release_heal.unwrap_or(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_build_attributes() {
        let character = Character::new(CharacterId::new(10005), "小鳥遊星野", Squad::FrontLine)
            .with_star(7)
            .with_level(90)
            .with_skills(5, 10, 10, 10)
            .with_gear(9, 9, 8)
            .with_unique_gear(2)
            .with_weapon_level(50)
            .with_releases(25, 0, 0);
        assert_eq!(character.star(), 7);
        assert_eq!(character.gear(), (9, 9, 8));
        assert_eq!(character.releases(), (25, 0, 0));
        assert_eq!(character.weapon_level(), Some(50));
    }

    #[test]
    fn test_serde_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 10010,
            "name": "砂狼白子",
            "squad": "front-line",
            "star": 5,
            "level": 85,
            "gear1": 8,
            "gear2": 8,
            "gear3": 8,
            "skillEx": 5,
            "skillN": 7,
            "skillP": 7,
            "skillSub": 7
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert!(character.aliases().is_empty());
        assert_eq!(character.releases(), (0, 0, 0));
        assert_eq!(character.gear_unique(), None);
    }
}
