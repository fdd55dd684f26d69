//! Raidflow Domain - battle flows, team composition, and layout.
//!
//! The core of a planner for multi-team raid timelines: free-form notation
//! text parses into stage sequences, teams enforce squad-capacity slot
//! rules, stage sequences support boundary-preserving edits, and a shelf
//! packer lays finished flows out into fixed-size export pages.
//!
//! Everything in this crate is a synchronous, pure-data transformation.
//! External capabilities - the character roster and text measurement - are
//! passed in by the caller ([`NameIndex`], a measure closure), so the crate
//! performs no I/O and holds no ambient state.

pub mod description;
pub mod entities;
pub mod flow;
pub mod ids;
pub mod layout;
pub mod value_objects;

pub use entities::{Battle, BattleProps, Character, Team};
pub use flow::{
    Direction, Flow, FlowGrammar, NameIndex, Side, DEFAULT_STAGE_COMMENT, INSERTED_STAGE_COMMENT,
};
pub use ids::{BattleId, CharacterId};
pub use layout::{paginate, Column, Gap, Page, StageLayoutInfo};
pub use value_objects::{
    join_comments, Action, BattleMode, Member, ParseBattleModeError, Squad, Stage, TeamStructure,
};
