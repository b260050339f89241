// src/map/key.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The kinds of key a lock can require. Each one pairs a door tile with the
/// item that opens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyType {
    ChargeBeam,
    Missile,
    LavaSuit,
    IceBeam,
    WaterSuit,
    XRay,
    KeyA,
    KeyB,
    KeyC,
}

impl KeyType {
    pub const ALL: [KeyType; 9] = [
        KeyType::ChargeBeam,
        KeyType::Missile,
        KeyType::LavaSuit,
        KeyType::IceBeam,
        KeyType::WaterSuit,
        KeyType::XRay,
        KeyType::KeyA,
        KeyType::KeyB,
        KeyType::KeyC,
    ];

    /// The character used for this key on the command line.
    pub fn symbol(self) -> char {
        match self {
            KeyType::ChargeBeam => 'c',
            KeyType::Missile => 'm',
            KeyType::LavaSuit => 'l',
            KeyType::IceBeam => 'i',
            KeyType::WaterSuit => 'w',
            KeyType::XRay => 'x',
            KeyType::KeyA => '1',
            KeyType::KeyB => '2',
            KeyType::KeyC => '3',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<KeyType> {
        KeyType::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    pub fn name(self) -> &'static str {
        match self {
            KeyType::ChargeBeam => "charge beam",
            KeyType::Missile => "missile",
            KeyType::LavaSuit => "lava suit",
            KeyType::IceBeam => "ice beam",
            KeyType::WaterSuit => "water suit",
            KeyType::XRay => "x-ray",
            KeyType::KeyA => "key A",
            KeyType::KeyB => "key B",
            KeyType::KeyC => "key C",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A key as placed in a dungeon: its kind plus its tier, the 1-based position
/// in the progression. Tier 0 is never a key; it is the partition reachable
/// from the start without any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Key {
    pub kind: KeyType,
    pub tier: u8,
}

/// The ordered list of keys a player collects, first to last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOrder {
    keys: Vec<Key>,
}

impl KeyOrder {
    /// Builds an order from key kinds. Empty lists and repeated kinds are
    /// rejected.
    pub fn new(kinds: &[KeyType]) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::NoKeys);
        }
        let mut keys: Vec<Key> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if keys.iter().any(|key| key.kind == kind) {
                return Err(ConfigError::DuplicateKey(kind.symbol()));
            }
            keys.push(Key {
                kind,
                tier: keys.len() as u8 + 1,
            });
        }
        Ok(KeyOrder { keys })
    }

    /// Parses a string of key characters such as `"cmx"`. Whitespace is
    /// ignored.
    pub fn parse(symbols: &str) -> Result<Self, ConfigError> {
        let kinds = symbols
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| KeyType::from_symbol(c).ok_or(ConfigError::UnknownKey(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&kinds)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// The tier of the last key, which is also the deepest partition.
    pub fn final_tier(&self) -> u8 {
        self.keys.len() as u8
    }

    pub fn key(&self, tier: u8) -> Option<Key> {
        if tier == 0 {
            return None;
        }
        self.keys.get(tier as usize - 1).copied()
    }

    pub fn symbols(&self) -> String {
        self.keys.iter().map(|key| key.kind.symbol()).collect()
    }
}

impl FromStr for KeyOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyOrder::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assigns_tiers_in_order() {
        let order = KeyOrder::parse("mc1").unwrap();
        assert_eq!(order.len(), 3);
        assert_eq!(order.keys()[0], Key { kind: KeyType::Missile, tier: 1 });
        assert_eq!(order.keys()[1], Key { kind: KeyType::ChargeBeam, tier: 2 });
        assert_eq!(order.keys()[2], Key { kind: KeyType::KeyA, tier: 3 });
        assert_eq!(order.final_tier(), 3);
        assert_eq!(order.symbols(), "mc1");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(KeyOrder::parse(""), Err(ConfigError::NoKeys));
        assert_eq!(KeyOrder::parse("  "), Err(ConfigError::NoKeys));
        assert_eq!(KeyOrder::parse("cmc"), Err(ConfigError::DuplicateKey('c')));
        assert_eq!(KeyOrder::parse("cq"), Err(ConfigError::UnknownKey('q')));
    }

    #[test]
    fn test_key_lookup_by_tier() {
        let order: KeyOrder = "xw".parse().unwrap();
        assert_eq!(order.key(0), None);
        assert_eq!(order.key(2).map(|k| k.kind), Some(KeyType::WaterSuit));
        assert_eq!(order.key(3), None);
    }

    #[test]
    fn test_symbols_round_trip_through_every_kind() {
        for kind in KeyType::ALL {
            assert_eq!(KeyType::from_symbol(kind.symbol()), Some(kind));
        }
    }
}
