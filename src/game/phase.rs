//! Top-level game phase.

use serde::{Deserialize, Serialize};

/// Game phase. Moves `Setup -> Playing -> Ended`; only a reset goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Host is entering box values.
    #[default]
    Setup,
    /// Contestant is picking and eliminating boxes.
    Playing,
    /// Deal accepted or final box revealed.
    Ended,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Setup => "setup",
            GamePhase::Playing => "playing",
            GamePhase::Ended => "ended",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_setup() {
        assert_eq!(GamePhase::default(), GamePhase::Setup);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&GamePhase::Playing).unwrap(), "\"playing\"");
        let phase: GamePhase = serde_json::from_str("\"ended\"").unwrap();
        assert_eq!(phase, GamePhase::Ended);
        assert_eq!(phase.to_string(), "ended");
    }
}
