//! Adapter layer: Convert bookmark DTOs to domain state.
//!
//! This is the ONLY place where bookmark wire shapes become domain types.
//! The backend keys the state map with stringified ids (JSON object keys
//! are always strings); domain code works with `i64` book ids.

use std::collections::HashMap;

use super::dto;
use crate::remote::domain::RemoteError;

/// Convert a batch check response into an id → bookmarked map.
pub fn to_states(response: dto::CheckResponse) -> Result<HashMap<i64, bool>, RemoteError> {
    if !response.success {
        return Err(RemoteError::Api(
            "bookmark check was not successful".to_string(),
        ));
    }

    let mut states = HashMap::with_capacity(response.bookmarks.len());
    for (key, bookmarked) in response.bookmarks {
        let id: i64 = key
            .parse()
            .map_err(|_| RemoteError::Parse(format!("non-numeric book id: {key}")))?;
        states.insert(id, bookmarked);
    }
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_states_parses_keys() {
        let response = dto::CheckResponse {
            success: true,
            bookmarks: HashMap::from([("12".to_string(), true), ("19".to_string(), false)]),
        };

        let states = to_states(response).unwrap();
        assert_eq!(states.get(&12), Some(&true));
        assert_eq!(states.get(&19), Some(&false));
    }

    #[test]
    fn test_to_states_rejects_failure() {
        let response = dto::CheckResponse {
            success: false,
            bookmarks: HashMap::new(),
        };
        assert!(matches!(to_states(response), Err(RemoteError::Api(_))));
    }

    #[test]
    fn test_to_states_rejects_non_numeric_key() {
        let response = dto::CheckResponse {
            success: true,
            bookmarks: HashMap::from([("abc".to_string(), true)]),
        };
        assert!(matches!(to_states(response), Err(RemoteError::Parse(_))));
    }
}
