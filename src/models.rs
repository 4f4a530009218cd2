//! Typed records produced by the query decoders.
//!
//! Each query has a `*Raw` shape carrying the numeric codes exactly as the
//! server sent them, and a translated shape where game mode, master mode,
//! weapon, privilege and state are replaced by their human-readable names
//! via [`crate::names`]. The translated shapes are `From<Raw>` so callers
//! that want both only pay for one decode.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::names;

/// Reply to a basic info query, numeric codes untranslated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfoRaw {
    pub clients: i32,
    pub protocol_version: i32,
    pub game_mode: i32,
    pub secs_left: i32,
    pub max_clients: i32,
    pub master_mode: i32,
    pub map: String,
    pub description: String,
}

/// Reply to a basic info query with mode codes translated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub clients: i32,
    pub protocol_version: i32,
    pub game_mode: String,
    pub secs_left: i32,
    pub max_clients: i32,
    pub master_mode: String,
    pub map: String,
    pub description: String,
}

impl From<BasicInfoRaw> for BasicInfo {
    fn from(raw: BasicInfoRaw) -> Self {
        Self {
            clients: raw.clients,
            protocol_version: raw.protocol_version,
            game_mode: names::game_mode_name(raw.game_mode),
            secs_left: raw.secs_left,
            max_clients: raw.max_clients,
            master_mode: names::master_mode_name(raw.master_mode),
            map: raw.map,
            description: raw.description,
        }
    }
}

/// One team's standing in a team game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    /// Team name, e.g. "good".
    pub name: String,
    /// Flags in ctf modes, skulls in collect, points in capture.
    pub score: i32,
    /// Ids of the bases the team holds; empty outside capture modes.
    pub bases: Vec<i32>,
}

/// Reply to a teams-scores query, game mode untranslated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsScoresRaw {
    pub game_mode: i32,
    pub secs_left: i32,
    /// One entry per team, in server transmission order.
    pub scores: Vec<TeamScore>,
}

/// Reply to a teams-scores query with the game mode translated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsScores {
    pub game_mode: String,
    pub secs_left: i32,
    pub scores: Vec<TeamScore>,
}

impl From<TeamsScoresRaw> for TeamsScores {
    fn from(raw: TeamsScoresRaw) -> Self {
        Self {
            game_mode: names::game_mode_name(raw.game_mode),
            secs_left: raw.secs_left,
            scores: raw.scores,
        }
    }
}

/// One player's stats, numeric codes untranslated.
///
/// Valid only for the moment of the query: the cn is reassigned once the
/// player disconnects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfoRaw {
    pub client_num: i32,
    pub ping: i32,
    pub name: String,
    pub team: String,
    pub frags: i32,
    pub flags: i32,
    pub deaths: i32,
    pub teamkills: i32,
    pub damage: i32,
    pub health: i32,
    pub armour: i32,
    pub weapon: i32,
    pub privilege: i32,
    pub state: i32,
    pub ip: Ipv4Addr,
}

/// One player's stats with weapon, privilege and state translated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub client_num: i32,
    pub ping: i32,
    pub name: String,
    pub team: String,
    pub frags: i32,
    pub flags: i32,
    pub deaths: i32,
    pub teamkills: i32,
    pub damage: i32,
    pub health: i32,
    pub armour: i32,
    pub weapon: String,
    pub privilege: String,
    pub state: String,
    pub ip: Ipv4Addr,
}

impl From<PlayerInfoRaw> for PlayerInfo {
    fn from(raw: PlayerInfoRaw) -> Self {
        Self {
            client_num: raw.client_num,
            ping: raw.ping,
            name: raw.name,
            team: raw.team,
            frags: raw.frags,
            flags: raw.flags,
            deaths: raw.deaths,
            teamkills: raw.teamkills,
            damage: raw.damage,
            health: raw.health,
            armour: raw.armour,
            weapon: names::weapon_name(raw.weapon),
            privilege: names::privilege_name(raw.privilege),
            state: names::state_name(raw.state),
            ip: raw.ip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn basic_info_translation() {
        let raw = BasicInfoRaw {
            clients: 5,
            protocol_version: 259,
            game_mode: 12,
            secs_left: 300,
            max_clients: 16,
            master_mode: 0,
            map: "turbine".to_owned(),
            description: "an example server".to_owned(),
        };
        let info = BasicInfo::from(raw);
        assert_eq!(info.game_mode, "insta ctf");
        assert_eq!(info.master_mode, "open");
        assert_eq!(info.map, "turbine");
    }

    #[test]
    fn player_info_translation_keeps_unknown_codes() {
        let raw = PlayerInfoRaw {
            client_num: 3,
            ping: 42,
            name: "ot".to_owned(),
            team: "evil".to_owned(),
            frags: 11,
            flags: 1,
            deaths: 7,
            teamkills: 0,
            damage: 1450,
            health: 100,
            armour: 0,
            weapon: 4,
            privilege: 0,
            state: 9,
            ip: Ipv4Addr::new(10, 0, 0, 3),
        };
        let info = PlayerInfo::from(raw);
        assert_eq!(info.weapon, "rifle");
        assert_eq!(info.privilege, "none");
        assert_eq!(info.state, "9");
    }

    #[test]
    fn teams_scores_serialize_shape() {
        let scores = TeamsScores::from(TeamsScoresRaw {
            game_mode: 11,
            secs_left: 171,
            scores: vec![TeamScore {
                name: "good".to_owned(),
                score: 5,
                bases: vec![],
            }],
        });
        assert_eq!(
            serde_json::to_value(&scores).unwrap(),
            json!({
                "game_mode": "ctf",
                "secs_left": 171,
                "scores": [
                    { "name": "good", "score": 5, "bases": [] }
                ]
            })
        );
    }
}
