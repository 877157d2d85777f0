//! Seed codec: compact reversible tokens for shareable deep links
//!
//! Token format: `RARITY-ELE-WEA-ROL-TIMESTAMP`, where the middle parts are
//! the first three letters of the attribute names uppercased and the
//! timestamp is epoch milliseconds.

use serde::Serialize;

use crate::domain::value_objects::{Element, RarityGrade, Role, WeaponType};

/// Attributes recovered from a seed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSeed {
    pub rarity: RarityGrade,
    pub element: Element,
    pub weapon_type: WeaponType,
    pub role: Role,
    pub timestamp: i64,
}

/// Encode rolled attributes and a timestamp into a seed token.
pub fn encode(
    rarity: RarityGrade,
    element: Element,
    weapon_type: WeaponType,
    role: Role,
    timestamp: i64,
) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        rarity.as_str(),
        element.code(),
        weapon_type.code(),
        role.code(),
        timestamp
    )
}

/// Decode a seed token back into attributes.
///
/// Returns `None` on any malformation: fewer than five parts, an unknown
/// rarity code, a code with no reverse lookup, or a non-integer timestamp.
pub fn decode(token: &str) -> Option<ParsedSeed> {
    let parts: Vec<&str> = token.split('-').collect();
    if parts.len() < 5 {
        return None;
    }

    let rarity = RarityGrade::from_code(parts[0])?;
    let element = Element::from_code(parts[1])?;
    let weapon_type = WeaponType::from_code(parts[2])?;
    let role = Role::from_code(parts[3])?;
    let timestamp: i64 = parts[4].parse().ok()?;

    Some(ParsedSeed {
        rarity,
        element,
        weapon_type,
        role,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_table_combination() {
        let timestamp = 1_700_000_000_000;
        for rarity in RarityGrade::ALL {
            for element in Element::ALL {
                for weapon in WeaponType::ALL {
                    for role in Role::ALL {
                        let token = encode(rarity, element, weapon, role, timestamp);
                        let parsed = decode(&token).expect("encoded token must decode");
                        assert_eq!(
                            parsed,
                            ParsedSeed {
                                rarity,
                                element,
                                weapon_type: weapon,
                                role,
                                timestamp
                            },
                            "token {token}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn decodes_known_token() {
        let parsed = decode("B-FIR-SWO-DPS-1700000000000").expect("valid token");
        assert_eq!(parsed.rarity, RarityGrade::B);
        assert_eq!(parsed.element, Element::Fire);
        assert_eq!(parsed.weapon_type, WeaponType::Sword);
        assert_eq!(parsed.role, Role::Dps);
        assert_eq!(parsed.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn decode_is_case_insensitive_on_attribute_codes() {
        assert!(decode("SS-voi-cat-con-12345").is_some());
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("B-FIR-SWO-DPS"), None); // too few parts
        assert_eq!(decode("Z-FIR-SWO-DPS-1700000000000"), None); // bad rarity
        assert_eq!(decode("B-XXX-SWO-DPS-1700000000000"), None); // bad element
        assert_eq!(decode("B-FIR-YYY-DPS-1700000000000"), None); // bad weapon
        assert_eq!(decode("B-FIR-SWO-ZZZ-1700000000000"), None); // bad role
        assert_eq!(decode("B-FIR-SWO-DPS-notanumber"), None); // bad timestamp
    }
}
