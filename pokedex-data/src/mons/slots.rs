use serde::{
    Deserialize,
    Serialize,
};

use crate::NamedResource;

/// A type assigned to a species, in its upstream slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    pub r#type: NamedResource,
}

/// An ability a species may have, in its upstream slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u32,
}
