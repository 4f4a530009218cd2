//! Request building and reply decoding, one submodule per query type.
//!
//! A request is three compact integers: query class, sub-type, argument.
//! The sub-type only matters for the extended class and the argument only
//! for player-stats queries, but all three are always encoded so that
//! building and decoding a request are exact inverses.

pub mod basic_info;
pub mod player_info;
pub mod teams_scores;
pub mod uptime;

use crate::cursor::{put_int, Cursor};
use crate::errors::Result;

/// Query classes.
pub const EXT_INFO: i32 = 0;
pub const BASIC_INFO: i32 = 1;

/// Sub-types of the extended query class.
pub const EXT_UPTIME: i32 = 0;
pub const EXT_PLAYER_STATS: i32 = 1;
pub const EXT_TEAMS_SCORES: i32 = 2;

/// Marker echoed by servers to acknowledge an extended query.
pub const EXT_ACK: i32 = -1;
/// Protocol revision this client speaks.
pub const EXT_VERSION: i32 = 105;
/// Status marker in player replies; zero when the requested cn is known.
pub const EXT_NO_ERROR: i32 = 0;
/// Marker introducing the stats block of a player reply.
pub const EXT_PLAYER_STATS_RESP_STATS: i32 = -11;
/// Player-stats argument selecting every connected client.
pub const ALL_PLAYERS: i32 = -1;

/// One query addressed to a server's info port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Uptime,
    BasicInfo,
    TeamsScores,
    PlayerInfo { cn: i32 },
    AllPlayerInfo,
}

impl Request {
    /// The packet to send for this query.
    pub fn to_bytes(self) -> Vec<u8> {
        let (class, sub_type, argument) = match self {
            Request::Uptime => (EXT_INFO, EXT_UPTIME, 0),
            Request::BasicInfo => (BASIC_INFO, 0, 0),
            Request::TeamsScores => (EXT_INFO, EXT_TEAMS_SCORES, 0),
            Request::PlayerInfo { cn } => (EXT_INFO, EXT_PLAYER_STATS, cn),
            Request::AllPlayerInfo => (EXT_INFO, EXT_PLAYER_STATS, ALL_PLAYERS),
        };
        build_request(class, sub_type, argument)
    }
}

/// Encodes a request triple.
pub fn build_request(query_class: i32, sub_type: i32, argument: i32) -> Vec<u8> {
    let mut out = Vec::with_capacity(3);
    put_int(&mut out, query_class);
    put_int(&mut out, sub_type);
    put_int(&mut out, argument);
    out
}

/// Decodes a request triple, the inverse of [`build_request`].
///
/// Mostly useful for tooling that impersonates a server.
pub fn decode_request(buf: &[u8]) -> Result<(i32, i32, i32)> {
    let mut cur = Cursor::new(buf);
    Ok((cur.read_int()?, cur.read_int()?, cur.read_int()?))
}
