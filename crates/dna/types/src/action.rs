//! The terminal result of running Dna against one condition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ActionParseError;

/// Literal reported when Dna runs off its end without choosing anything.
pub const NOTHING: &str = "NOTHING";

/// What a lifeform decides to do in a turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Action {
    /// Execution fell off the end of the program.
    Nothing,
    /// An `APOPTOSIS` marker was reached.
    Apoptosis,
    /// A `FINAL*` marker was reached; the token is kept verbatim.
    Final(String),
}

impl Action {
    /// Whether an explicit terminal marker (rather than fallthrough) chose this action.
    pub fn is_terminal_marker(&self) -> bool {
        !matches!(self, Action::Nothing)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Nothing => NOTHING,
            Action::Apoptosis => "APOPTOSIS",
            Action::Final(token) => token,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Final(token) => token,
            other => other.as_str().to_string(),
        }
    }
}

impl TryFrom<String> for Action {
    type Error = ActionParseError;

    /// Accepts `NOTHING`, `APOPTOSIS` or a `FINAL*` marker.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            NOTHING => Ok(Action::Nothing),
            "APOPTOSIS" => Ok(Action::Apoptosis),
            token if token.starts_with("FINAL") => Ok(Action::Final(value)),
            _ => Err(ActionParseError(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_tokens() {
        assert_eq!(Action::Nothing.to_string(), "NOTHING");
        assert_eq!(Action::Apoptosis.to_string(), "APOPTOSIS");
        assert_eq!(Action::Final("FINAL_MOVE_EAST".into()).to_string(), "FINAL_MOVE_EAST");
    }

    #[test]
    fn terminal_marker() {
        assert!(!Action::Nothing.is_terminal_marker());
        assert!(Action::Apoptosis.is_terminal_marker());
        assert!(Action::Final("FINAL_X".into()).is_terminal_marker());
    }

    #[test]
    fn serde_as_plain_string() {
        let json = serde_json::to_string(&Action::Final("FINAL_X".into())).unwrap();
        assert_eq!(json, "\"FINAL_X\"");
        let action: Action = serde_json::from_str("\"NOTHING\"").unwrap();
        assert_eq!(action, Action::Nothing);
        let action: Action = serde_json::from_str("\"APOPTOSIS\"").unwrap();
        assert_eq!(action, Action::Apoptosis);
    }

    #[test]
    fn only_action_tokens_parse() {
        assert_eq!(
            Action::try_from("FINAL_MOVE_WEST".to_string()),
            Ok(Action::Final("FINAL_MOVE_WEST".into()))
        );
        assert_eq!(
            Action::try_from("NOP".to_string()),
            Err(ActionParseError("NOP".into()))
        );
        assert!(serde_json::from_str::<Action>("\"IS_CROWDED\"").is_err());
        assert!(serde_json::from_str::<Action>("\"\"").is_err());
    }
}
