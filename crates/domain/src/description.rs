//! Natural-language battle summaries.
//!
//! Pure string templating over resolved roster data. The section headers and
//! separators are the literal strings the community posts alongside exported
//! graphics, so they are reproduced byte for byte.

use std::collections::HashMap;

use crate::entities::{Character, Team};
use crate::ids::CharacterId;
use crate::value_objects::Member;

const EMPTY_SLOT: &str = "空格";

const CHINESE_NUMERALS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// Team numbering: 一..十, then the bare decimal index.
fn team_numeral(index: usize) -> String {
    CHINESE_NUMERALS
        .get(index)
        .map(|numeral| (*numeral).to_string())
        .unwrap_or_else(|| index.to_string())
}

/// Skill levels render as their number, with the maximum written `M`.
fn skill_transcript(level: u32) -> String {
    if level == 10 {
        "M".to_string()
    } else {
        level.to_string()
    }
}

/// One line summarizing a member slot: name, stars, level, skills, gear and
/// releases, space-joined, with absent pieces omitted.
pub fn member_summary(member: Member, characters: &HashMap<CharacterId, Character>) -> String {
    let character = match member.and_then(|id| characters.get(&id)) {
        Some(character) => character,
        None => return EMPTY_SLOT.to_string(),
    };

    let mut parts: Vec<String> = Vec::new();
    parts.push(character.name().replace('（', "(").replace('）', ")"));
    parts.push(format!("☆{}", character.star().min(5)));
    parts.push(format!("LV{}", character.level()));
    parts.push(format!(
        "{}{}{}{}",
        character.skill_ex(),
        skill_transcript(character.skill_n()),
        skill_transcript(character.skill_p()),
        skill_transcript(character.skill_sub()),
    ));
    if character.star() > 5 {
        parts.push(format!("固有{}", character.star() - 5));
    }
    if let Some(weapon_level) = character.weapon_level().filter(|level| *level != 0) {
        parts.push(weapon_level.to_string());
    }
    let (gear_1, gear_2, gear_3) = character.gear();
    parts.push(format!("T{gear_1}T{gear_2}T{gear_3}"));
    if let Some(tier) = character.gear_unique().filter(|tier| *tier != 0) {
        parts.push(format!("愛用品T{tier}"));
    }
    let (hp, atk, heal) = character.releases();
    if hp != 0 || atk != 0 || heal != 0 {
        parts.push(format!("{hp} {atk} {heal}"));
    }
    parts.join(" ")
}

/// Member lines for one team, one slot per line.
pub fn team_summary(team: &Team, characters: &HashMap<CharacterId, Character>) -> String {
    team.members()
        .iter()
        .map(|member| member_summary(*member, characters))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full multi-section description block for a set of teams.
///
/// Zero teams produce an empty string. A single team gets a flat 隊伍
/// section; multiple teams get a 時間軸 section with numbered sub-blocks,
/// and the raw notation text at the bottom is numbered the same way.
pub fn battle_summary(teams: &[Team], characters: &HashMap<CharacterId, Character>) -> String {
    if teams.is_empty() {
        return String::new();
    }
    let multiple = teams.len() > 1;

    let mut sections: Vec<String> = vec!["<簡述>".to_string(), String::new()];
    if multiple {
        sections.push("<時間軸>\n".to_string());
        sections.push(
            teams
                .iter()
                .enumerate()
                .map(|(index, team)| {
                    format!("{}隊：\n{}", team_numeral(index), team_summary(team, characters))
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        );
    } else {
        sections.push("隊伍：\n".to_string());
        sections.push(team_summary(&teams[0], characters));
    }
    sections.extend([
        String::new(),
        "文字敘述重要時間點：".to_string(),
        String::new(),
        "※先說凹點：".to_string(),
        "<凹點>".to_string(),
        String::new(),
    ]);
    if multiple {
        sections.push(
            teams
                .iter()
                .enumerate()
                .map(|(index, team)| format!("{}隊：\n{}", team_numeral(index), team.text()))
                .collect::<Vec<_>>()
                .join("\n\n"),
        );
    } else {
        sections.push(teams[0].text().to_string());
    }
    sections.join("\n")
}
