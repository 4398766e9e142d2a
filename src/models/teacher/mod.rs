// Teacher module

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
}

impl Teacher {
    pub fn new(id: i64, name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Teacher name cannot be empty".to_string());
        }
        Ok(Self { id, name })
    }
}
