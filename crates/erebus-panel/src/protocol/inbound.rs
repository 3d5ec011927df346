//! Host → panel messages

use crate::constants::{inbound as tags, FIELD_DELIMITER, HISTORY_SIDE_DELIMITER, NO_CONTROLLER_NAME};
use crate::error::ProtocolError;
use crate::model::{Rgb, Slot};

/// A message from the host supervisor.
#[derive(Clone, Debug, PartialEq)]
pub enum HostMessage {
    /// Host is ready; enables run and reset
    Startup,
    /// Per-frame scores and elapsed seconds
    Update { scores: [i32; 2], elapsed: f64 },
    /// A controller was loaded into a slot
    Loaded { slot: Slot, name: String },
    /// A slot's controller was removed
    Unloaded { slot: Slot },
    /// The match clock ran out
    Ended,
    /// Robot picked up a human
    HumanLoaded { slot: Slot },
    /// Robot dropped its human
    HumanUnloaded { slot: Slot },
    /// Robot picked up an activity of the given colour
    ActivityLoaded { slot: Slot, colour: Rgb },
    /// Robot dropped its activity
    ActivityUnloaded { slot: Slot },
    /// Full per-side history, oldest first
    HistoryUpdate { entries: [Vec<String>; 2] },
}

impl HostMessage {
    /// Parse one host message.
    ///
    /// Returns `Ok(None)` for an empty message or an unrecognized tag. Tags
    /// without a payload ignore any trailing fields.
    pub fn parse(message: &str) -> Result<Option<Self>, ProtocolError> {
        let (tag, rest) = match message.split_once(FIELD_DELIMITER) {
            Some((tag, rest)) => (tag, Some(rest)),
            None => (message, None),
        };

        match tag {
            "" => return Ok(None),
            tags::STARTUP => return Ok(Some(HostMessage::Startup)),
            tags::ENDED => return Ok(Some(HostMessage::Ended)),
            tags::UPDATE => return parse_update(rest).map(Some),
            tags::HISTORY_UPDATE => return parse_history(rest).map(Some),
            _ => {}
        }

        let Some((base, slot)) = split_slot(tag) else {
            return Ok(None);
        };

        let msg = match base {
            tags::LOADED => HostMessage::Loaded {
                slot,
                name: rest.unwrap_or(NO_CONTROLLER_NAME).to_string(),
            },
            tags::UNLOADED => HostMessage::Unloaded { slot },
            tags::HUMAN_LOADED => HostMessage::HumanLoaded { slot },
            tags::HUMAN_UNLOADED => HostMessage::HumanUnloaded { slot },
            tags::ACTIVITY_LOADED => HostMessage::ActivityLoaded {
                slot,
                colour: parse_colour(rest)?,
            },
            tags::ACTIVITY_UNLOADED => HostMessage::ActivityUnloaded { slot },
            _ => return Ok(None),
        };
        Ok(Some(msg))
    }

    /// Wire tag of this message, without payload.
    pub fn tag(&self) -> String {
        match self {
            HostMessage::Startup => tags::STARTUP.to_string(),
            HostMessage::Update { .. } => tags::UPDATE.to_string(),
            HostMessage::Ended => tags::ENDED.to_string(),
            HostMessage::HistoryUpdate { .. } => tags::HISTORY_UPDATE.to_string(),
            HostMessage::Loaded { slot, .. } => format!("{}{}", tags::LOADED, slot.suffix()),
            HostMessage::Unloaded { slot } => format!("{}{}", tags::UNLOADED, slot.suffix()),
            HostMessage::HumanLoaded { slot } => {
                format!("{}{}", tags::HUMAN_LOADED, slot.suffix())
            }
            HostMessage::HumanUnloaded { slot } => {
                format!("{}{}", tags::HUMAN_UNLOADED, slot.suffix())
            }
            HostMessage::ActivityLoaded { slot, .. } => {
                format!("{}{}", tags::ACTIVITY_LOADED, slot.suffix())
            }
            HostMessage::ActivityUnloaded { slot } => {
                format!("{}{}", tags::ACTIVITY_UNLOADED, slot.suffix())
            }
        }
    }
}

/// Split `loaded0` into (`loaded`, `Slot::Zero`).
fn split_slot(tag: &str) -> Option<(&str, Slot)> {
    let split = tag.len().checked_sub(1)?;
    if !tag.is_char_boundary(split) {
        return None;
    }
    let (base, suffix) = tag.split_at(split);
    Slot::from_suffix(suffix).map(|slot| (base, slot))
}

/// Split a payload into exactly `N` fields.
fn fields<'a, const N: usize>(
    tag: &'static str,
    names: [&'static str; N],
    rest: Option<&'a str>,
) -> Result<[&'a str; N], ProtocolError> {
    let mut out = [""; N];
    let mut parts = rest.map(|r| r.split(FIELD_DELIMITER));
    for (i, &name) in names.iter().enumerate() {
        out[i] = parts
            .as_mut()
            .and_then(|p| p.next())
            .ok_or(ProtocolError::MissingField { tag, field: name })?;
    }
    if let Some(extra) = parts {
        let extra = extra.count();
        if extra > 0 {
            return Err(ProtocolError::TooManyFields {
                tag,
                expected: N,
                got: N + extra,
            });
        }
    }
    Ok(out)
}

fn parse_f64(tag: &'static str, field: &'static str, value: &str) -> Result<f64, ProtocolError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ProtocolError::InvalidNumber {
            tag,
            field,
            value: value.to_string(),
        })
}

/// Scores are integers on the wire, but tolerate a float with its fraction dropped.
fn parse_score(tag: &'static str, field: &'static str, value: &str) -> Result<i32, ProtocolError> {
    if let Ok(score) = value.trim().parse::<i32>() {
        return Ok(score);
    }
    let f = parse_f64(tag, field, value)?;
    if !f.is_finite() {
        return Err(ProtocolError::InvalidNumber {
            tag,
            field,
            value: value.to_string(),
        });
    }
    Ok(f.trunc() as i32)
}

fn parse_update(rest: Option<&str>) -> Result<HostMessage, ProtocolError> {
    let [a, b, elapsed] = fields(tags::UPDATE, ["score0", "score1", "elapsed"], rest)?;
    Ok(HostMessage::Update {
        scores: [
            parse_score(tags::UPDATE, "score0", a)?,
            parse_score(tags::UPDATE, "score1", b)?,
        ],
        elapsed: parse_f64(tags::UPDATE, "elapsed", elapsed)?,
    })
}

fn parse_colour(rest: Option<&str>) -> Result<Rgb, ProtocolError> {
    let tag = tags::ACTIVITY_LOADED;
    let [r, g, b] = fields(tag, ["r", "g", "b"], rest)?;
    Ok(Rgb::new(
        parse_f64(tag, "r", r)?,
        parse_f64(tag, "g", g)?,
        parse_f64(tag, "b", b)?,
    ))
}

fn parse_history(rest: Option<&str>) -> Result<HostMessage, ProtocolError> {
    let rest = rest.ok_or(ProtocolError::MissingField {
        tag: tags::HISTORY_UPDATE,
        field: "history",
    })?;
    let (a, b) = rest
        .split_once(HISTORY_SIDE_DELIMITER)
        .ok_or(ProtocolError::MissingSideSeparator)?;
    Ok(HostMessage::HistoryUpdate {
        entries: [split_side(a), split_side(b)],
    })
}

fn split_side(side: &str) -> Vec<String> {
    if side.is_empty() {
        return Vec::new();
    }
    side.split(FIELD_DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(msg: &str) -> HostMessage {
        HostMessage::parse(msg).unwrap().unwrap()
    }

    #[test]
    fn test_parse_simple_tags() {
        assert_eq!(parse("startup"), HostMessage::Startup);
        assert_eq!(parse("ended"), HostMessage::Ended);
        assert_eq!(parse("unloaded1"), HostMessage::Unloaded { slot: Slot::One });
        assert_eq!(parse("humanLoaded0"), HostMessage::HumanLoaded { slot: Slot::Zero });
        assert_eq!(parse("humanUnloaded1"), HostMessage::HumanUnloaded { slot: Slot::One });
        assert_eq!(
            parse("activityUnloaded0"),
            HostMessage::ActivityUnloaded { slot: Slot::Zero }
        );
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            parse("update,10,-5,65.25"),
            HostMessage::Update {
                scores: [10, -5],
                elapsed: 65.25
            }
        );
    }

    #[test]
    fn test_update_arity_is_checked() {
        assert_eq!(
            HostMessage::parse("update,1,2"),
            Err(ProtocolError::MissingField {
                tag: "update",
                field: "elapsed"
            })
        );
        assert_eq!(
            HostMessage::parse("update"),
            Err(ProtocolError::MissingField {
                tag: "update",
                field: "score0"
            })
        );
        assert_eq!(
            HostMessage::parse("update,1,2,3,4"),
            Err(ProtocolError::TooManyFields {
                tag: "update",
                expected: 3,
                got: 4
            })
        );
    }

    #[test]
    fn test_update_rejects_garbage_numbers() {
        let err = HostMessage::parse("update,one,2,3").unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidNumber { field: "score0", .. }));
    }

    #[test]
    fn test_loaded_name_keeps_commas() {
        assert_eq!(
            parse("loaded1,Team, the Best"),
            HostMessage::Loaded {
                slot: Slot::One,
                name: "Team, the Best".to_string()
            }
        );
        assert_eq!(
            parse("loaded0"),
            HostMessage::Loaded {
                slot: Slot::Zero,
                name: "None".to_string()
            }
        );
    }

    #[test]
    fn test_activity_colour() {
        assert_eq!(
            parse("activityLoaded1,1,0.5,0"),
            HostMessage::ActivityLoaded {
                slot: Slot::One,
                colour: Rgb::new(1.0, 0.5, 0.0)
            }
        );
        assert!(HostMessage::parse("activityLoaded1,1,0.5").is_err());
    }

    #[test]
    fn test_history_update() {
        assert_eq!(
            parse("historyUpdate,a1,a2,a3:b1,b2"),
            HostMessage::HistoryUpdate {
                entries: [
                    vec!["a1".into(), "a2".into(), "a3".into()],
                    vec!["b1".into(), "b2".into()]
                ]
            }
        );
        assert_eq!(
            parse("historyUpdate,:"),
            HostMessage::HistoryUpdate {
                entries: [vec![], vec![]]
            }
        );
        assert_eq!(
            HostMessage::parse("historyUpdate,a1,a2"),
            Err(ProtocolError::MissingSideSeparator)
        );
    }

    #[test]
    fn test_unknown_tags_are_dropped() {
        assert_eq!(HostMessage::parse(""), Ok(None));
        assert_eq!(HostMessage::parse("bogus,1,2"), Ok(None));
        assert_eq!(HostMessage::parse("loaded2,x"), Ok(None));
        assert_eq!(HostMessage::parse("startup0"), Ok(None));
        assert_eq!(HostMessage::parse("é"), Ok(None));
    }

    #[test]
    fn test_tag_matches_wire() {
        for wire in ["startup", "ended", "loaded1,x", "humanUnloaded0", "activityLoaded0,0,0,0"] {
            let tag = wire.split(',').next().unwrap();
            assert_eq!(parse(wire).tag(), tag);
        }
    }
}
