use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub type AircraftGroup = Arc<str>;

pub const WIDEBODY: &str = "Widebody";

/// Aircraft type prefix (first three characters of the roster code) to group label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AircraftGroups(pub HashMap<String, AircraftGroup>);

impl AircraftGroups {
    pub fn type_prefix(code: &str) -> &str {
        let code = code.trim();
        code.char_indices()
            .nth(3)
            .map(|(idx, _)| &code[..idx])
            .unwrap_or(code)
    }

    pub fn group_of(&self, code: &str) -> Option<&AircraftGroup> {
        self.0.get(Self::type_prefix(code))
    }

    pub fn is_widebody(&self, code: &str) -> bool {
        self.group_of(code).is_some_and(|g| &**g == WIDEBODY)
    }
}
