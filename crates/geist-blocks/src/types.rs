use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier substituted whenever a block cannot be resolved.
pub const AIR: &str = "minecraft:air";

/// Every spelling of "no block here", namespaced and bare.
pub const EMPTY_BLOCK_NAMES: [&str; 6] = [
    "minecraft:air",
    "minecraft:cave_air",
    "minecraft:void_air",
    "air",
    "cave_air",
    "void_air",
];

#[inline]
pub fn is_empty_name(name: &str) -> bool {
    EMPTY_BLOCK_NAMES.contains(&name)
}

/// Namespaced block name such as `minecraft:stone`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn air() -> Self {
        Self(AIR.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        is_empty_name(&self.0)
    }

    /// Namespace prefix, if any (`minecraft` for `minecraft:stone`).
    pub fn namespace(&self) -> Option<&str> {
        self.0.split_once(':').map(|(ns, _)| ns)
    }

    /// Name without namespace or block-state suffix.
    pub fn path(&self) -> &str {
        let name = self.0.split_once(':').map_or(self.0.as_str(), |(_, p)| p);
        name.split('[').next().unwrap_or(name)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::air()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BlockId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BlockId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
