
//! Decoders for the serialized compound keys of the subscalar maps. The
//! offline summing pipeline packs structured values into `|`- and
//! `:`-delimited strings; these parse them back into their structured
//! forms. Field positions must match the store's encoder exactly.

use crate::aggregation::{ErrorKind, Result, ResultExt};
use crate::models::Ability;
use std::collections::HashMap;

/// Parses a rune or mastery page: `id:slot:count` elements joined by `|`.
/// The empty string is an empty page.
pub fn deserialize_bonus_set(s : &str) -> Result<HashMap<u32, u32>> {
    let mut ret = HashMap::new();

    if s.is_empty() {
        return Ok(ret);
    }

    for element in s.split('|') {
        let (id, count) = deserialize_bonus_set_element(element)?;
        ret.insert(id, count);
    }
    Ok(ret)
}

/// Parses one `id:slot:count` element, e.g. a keystone. The empty string
/// is an absent element. The middle field is the page slot and is not part
/// of the parsed view; the count sits at the third position.
pub fn deserialize_bonus_set_element(s : &str) -> Result<(u32, u32)> {
    if s.is_empty() {
        return Ok((0, 0));
    }

    let fields : Vec<&str> = s.split(':').collect();
    if fields.len() != 3 {
        return Err(ErrorKind::MalformedBonusElement(s.to_string()).into());
    }

    let id = fields[0].parse::<u32>()?;
    let count = fields[2].parse::<u32>()?;
    Ok((id, count))
}

/// Parses a summoner spell pair key, `id1|id2`.
pub fn deserialize_summoners(s : &str) -> Result<(u32, u32)> {
    let fields : Vec<&str> = s.split('|').collect();
    if fields.len() != 2 {
        return Err(ErrorKind::MalformedSummoners(s.to_string()).into());
    }

    let spell1 = fields[0].parse::<u32>()?;
    let spell2 = fields[1].parse::<u32>()?;
    Ok((spell1, spell2))
}

/// Parses a skill order key, a string over `QWER`, into the leveled
/// ability sequence.
pub fn deserialize_skill_order(s : &str) -> Result<Vec<Ability>> {
    s.chars()
        .map(|skill| match skill {
            'Q' => Ok(Ability::Q),
            'W' => Ok(Ability::W),
            'E' => Ok(Ability::E),
            'R' => Ok(Ability::R),
            other => Err(ErrorKind::UnknownSkill(other).into()),
        })
        .collect()
}

/// Parses an item build key, item ids joined by `|`. The empty string is
/// an empty build.
pub fn deserialize_build(s : &str) -> Result<Vec<u32>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split('|')
        .map(|item| {
            item.parse::<u32>()
                .chain_err(|| ErrorKind::UnknownItem(item.to_string()))
        })
        .collect()
}
