//! Rollable character attributes: element, weapon type, and combat role
//!
//! Each attribute carries a fixed canonical table and a 3-letter uppercase
//! code used by the seed codec. The codes must be unique within each table;
//! `verify_prefix_uniqueness` checks that invariant at startup.

use serde::{Deserialize, Serialize};

/// Elemental affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Electro,
    Geo,
    Wind,
    Ice,
    Void,
}

impl Element {
    pub const ALL: [Element; 7] = [
        Element::Fire,
        Element::Water,
        Element::Electro,
        Element::Geo,
        Element::Wind,
        Element::Ice,
        Element::Void,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Electro => "Electro",
            Element::Geo => "Geo",
            Element::Wind => "Wind",
            Element::Ice => "Ice",
            Element::Void => "Void",
        }
    }
}

/// Weapon the character wields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    Sword,
    Claymore,
    Spear,
    Bow,
    Catalyst,
}

impl WeaponType {
    pub const ALL: [WeaponType; 5] = [
        WeaponType::Sword,
        WeaponType::Claymore,
        WeaponType::Spear,
        WeaponType::Bow,
        WeaponType::Catalyst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponType::Sword => "Sword",
            WeaponType::Claymore => "Claymore",
            WeaponType::Spear => "Spear",
            WeaponType::Bow => "Bow",
            WeaponType::Catalyst => "Catalyst",
        }
    }
}

/// Combat role; each role keys a base-stat table in the stat engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "DPS")]
    Dps,
    #[serde(rename = "BurstDPS")]
    BurstDps,
    Support,
    Tank,
    Control,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Dps,
        Role::BurstDps,
        Role::Support,
        Role::Tank,
        Role::Control,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Dps => "DPS",
            Role::BurstDps => "BurstDPS",
            Role::Support => "Support",
            Role::Tank => "Tank",
            Role::Control => "Control",
        }
    }
}

macro_rules! impl_attribute_codes {
    ($ty:ident) => {
        impl $ty {
            /// 3-letter uppercase code used in seed tokens.
            pub fn code(self) -> String {
                self.as_str().chars().take(3).collect::<String>().to_uppercase()
            }

            /// Reverse lookup from a seed-token code (case-insensitive).
            pub fn from_code(code: &str) -> Option<$ty> {
                let upper = code.to_uppercase();
                $ty::ALL.iter().copied().find(|v| v.code() == upper)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_attribute_codes!(Element);
impl_attribute_codes!(WeaponType);
impl_attribute_codes!(Role);

/// Two entries of the same attribute table share a 3-letter prefix, which
/// would make seed tokens ambiguous.
#[derive(Debug, thiserror::Error)]
#[error("duplicate seed code {code:?} in {table} table")]
pub struct PrefixCollision {
    pub table: &'static str,
    pub code: String,
}

/// Verify that every attribute table has unique 3-letter codes.
///
/// The seed codec relies on this; run it once at startup so a table edit
/// that introduces a collision fails fast instead of corrupting tokens.
pub fn verify_prefix_uniqueness() -> Result<(), PrefixCollision> {
    fn check(table: &'static str, codes: Vec<String>) -> Result<(), PrefixCollision> {
        let mut seen = std::collections::HashSet::new();
        for code in codes {
            if !seen.insert(code.clone()) {
                return Err(PrefixCollision { table, code });
            }
        }
        Ok(())
    }

    check("element", Element::ALL.iter().map(|e| e.code()).collect())?;
    check("weapon", WeaponType::ALL.iter().map(|w| w.code()).collect())?;
    check("role", Role::ALL.iter().map(|r| r.code()).collect())?;
    Ok(())
}
