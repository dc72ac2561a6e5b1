//! Widget Models
//!
//! Data structures shared between widget state and persistence.

use serde::{Deserialize, Serialize};

/// One user-entered task
///
/// The collection is index-addressed; records carry no id. `editing` is part
/// of the stored layout and defaults to `false` when absent from saved data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub text: String,
    #[serde(default)]
    pub editing: bool,
}

impl TodoRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            editing: false,
        }
    }
}
