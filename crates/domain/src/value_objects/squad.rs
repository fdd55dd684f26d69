//! Squad categories governing slot eligibility.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two squad categories a character can belong to.
///
/// Front-line members fill the leading slots of a team and support members
/// the trailing slots; how many of each a team admits is fixed by
/// [`TeamStructure`](crate::TeamStructure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Squad {
    /// Fights from the leading slots.
    #[serde(rename = "front-line")]
    FrontLine,
    /// Backs the team from the trailing slots.
    #[serde(rename = "support")]
    Support,
}

impl Squad {
    pub fn label(&self) -> &'static str {
        match self {
            Squad::FrontLine => "front-line",
            Squad::Support => "support",
        }
    }
}

impl fmt::Display for Squad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_labels_round_trip() {
        let json = serde_json::to_string(&Squad::FrontLine).unwrap();
        assert_eq!(json, "\"front-line\"");
        assert_eq!(serde_json::from_str::<Squad>(&json).unwrap(), Squad::FrontLine);
        assert_eq!(
            serde_json::from_str::<Squad>("\"support\"").unwrap(),
            Squad::Support
        );
    }
}
