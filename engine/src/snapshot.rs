use crate::error::GameError;
use crate::game_state::GameState;
use crate::types::Action;

/// Serializes the mutable state for the persistence boundary. The blob
/// must restore to an identical state: grid contents, both positions,
/// turn number and turn party.
pub fn snapshot(state: &GameState) -> Result<String, GameError> {
    serde_json::to_string(state)
        .map_err(|e| GameError::Validation(format!("failed to serialize game state: {}", e)))
}

pub fn restore(blob: &str) -> Result<GameState, GameError> {
    serde_json::from_str(blob)
        .map_err(|e| GameError::Validation(format!("failed to deserialize game state: {}", e)))
}

/// Actions are stored in move records as their JSON form.
pub fn encode_action(action: &Action) -> Result<String, GameError> {
    serde_json::to_string(action)
        .map_err(|e| GameError::Validation(format!("failed to serialize action: {}", e)))
}
