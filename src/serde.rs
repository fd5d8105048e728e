//! Serialization and Deserialization implementation

use std::collections::HashMap;

use ::serde::de::Error as _;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::RadixTree;

/// The tree is written as a map from CIDR strings to values. Short IPv6 prefixes (at most 32
/// bits) come out in IPv4 notation, as with [`WalkFamily::Auto`](crate::WalkFamily::Auto).
impl<T: Serialize> Serialize for RadixTree<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter().map(|(net, value)| (net.to_string(), value)))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RadixTree<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map: HashMap<String, T> = HashMap::deserialize(deserializer)?;
        let mut tree = Self::new();
        for (cidr, value) in map {
            tree.set_cidr(&cidr, value)
                .map_err(|e| D::Error::custom(format!("{cidr}: {e}")))?;
        }
        Ok(tree)
    }
}
