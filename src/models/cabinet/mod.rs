// Cabinet module
// A bookable room shown as one column per displayed day

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CabinetId(pub u32);

impl std::fmt::Display for CabinetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cabinet {
    pub id: CabinetId,
    pub name: String,
}

impl Cabinet {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: CabinetId(id),
            name: name.into(),
        }
    }
}
