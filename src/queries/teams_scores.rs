//! Teams-scores reply decoding.

use crate::cursor::Cursor;
use crate::errors::{Error, Result};
use crate::models::{TeamScore, TeamsScoresRaw};
use crate::queries::EXT_VERSION;

/// Decodes a teams-scores reply.
///
/// The header is [class echo, sub-type echo, ack, version, team-mode flag,
/// game mode, seconds left]. The version is checked because the record
/// list that follows has no self-describing shape. A non-zero team-mode
/// flag means the current mode has no team scoreboard, which is reported
/// as [`Error::NotTeamMode`] so callers cannot mistake it for a team game
/// with no teams.
///
/// Records follow as {name, score, base count, base ids...} until a lone
/// zero byte where the next name would start. The terminator is required:
/// a buffer that simply ends is treated as truncated.
pub fn parse(response: &[u8]) -> Result<TeamsScoresRaw> {
    let mut cur = Cursor::new(response);
    for _ in 0..3 {
        cur.read_int()?; // class echo, sub-type echo, ack
    }
    let version = cur.read_int()?;
    if version != EXT_VERSION {
        return Err(Error::ProtocolVersionMismatch {
            expected: EXT_VERSION,
            actual: version,
        });
    }
    let is_team_mode = cur.read_int()? == 0;
    let game_mode = cur.read_int()?;
    let secs_left = cur.read_int()?;
    if !is_team_mode {
        return Err(Error::NotTeamMode);
    }

    let mut scores = Vec::new();
    loop {
        match cur.peek_u8() {
            None => return Err(Error::TruncatedResponse),
            Some(0) => {
                cur.read_bytes(1)?;
                break;
            }
            Some(_) => {}
        }
        let name = cur.read_cstring()?;
        let score = cur.read_int()?;
        let base_count = cur.read_int()?;
        let mut bases = Vec::new();
        for _ in 0..base_count {
            bases.push(cur.read_int()?);
        }
        scores.push(TeamScore { name, score, bases });
    }

    Ok(TeamsScoresRaw {
        game_mode,
        secs_left,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cursor::{put_cstring, put_int};
    use crate::queries::{EXT_ACK, EXT_INFO, EXT_TEAMS_SCORES};

    fn header(version: i32, team_mode_flag: i32, game_mode: i32, secs_left: i32) -> Vec<u8> {
        let mut buf = Vec::new();
        for n in [
            EXT_INFO,
            EXT_TEAMS_SCORES,
            EXT_ACK,
            version,
            team_mode_flag,
            game_mode,
            secs_left,
        ] {
            put_int(&mut buf, n);
        }
        buf
    }

    fn team(buf: &mut Vec<u8>, name: &str, score: i32, bases: &[i32]) {
        put_cstring(buf, name);
        put_int(buf, score);
        put_int(buf, bases.len() as i32);
        for &base in bases {
            put_int(buf, base);
        }
    }

    #[test]
    fn decodes_two_teams_in_order() {
        let mut buf = header(EXT_VERSION, 0, 12, 300);
        team(&mut buf, "good", 5, &[1, 3]);
        team(&mut buf, "evil", 2, &[]);
        buf.push(0x00);

        let scores = parse(&buf).unwrap();
        assert_eq!(
            scores,
            TeamsScoresRaw {
                game_mode: 12,
                secs_left: 300,
                scores: vec![
                    TeamScore {
                        name: "good".to_owned(),
                        score: 5,
                        bases: vec![1, 3],
                    },
                    TeamScore {
                        name: "evil".to_owned(),
                        score: 2,
                        bases: vec![],
                    },
                ],
            }
        );
    }

    #[test]
    fn no_teams_decodes_to_empty_list() {
        let mut buf = header(EXT_VERSION, 0, 2, 600);
        buf.push(0x00);
        assert_eq!(parse(&buf).unwrap().scores, vec![]);
    }

    #[test]
    fn non_team_mode_is_reported_as_such() {
        // Flag is non-zero and no records follow, not even a terminator.
        let buf = header(EXT_VERSION, 1, 3, 600);
        assert!(matches!(parse(&buf), Err(Error::NotTeamMode)));
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let mut buf = header(104, 0, 12, 300);
        buf.push(0x00);
        match parse(&buf) {
            Err(Error::ProtocolVersionMismatch { expected, actual }) => {
                assert_eq!(expected, EXT_VERSION);
                assert_eq!(actual, 104);
            }
            other => panic!("expected version mismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_terminator_is_truncation() {
        let mut buf = header(EXT_VERSION, 0, 12, 300);
        team(&mut buf, "good", 5, &[]);
        assert!(matches!(parse(&buf), Err(Error::TruncatedResponse)));
    }

    #[test]
    fn record_cut_mid_bases_is_truncation() {
        let mut buf = header(EXT_VERSION, 0, 9, 444);
        put_cstring(&mut buf, "good");
        put_int(&mut buf, 5);
        put_int(&mut buf, 3); // promises three base ids
        put_int(&mut buf, 1);
        assert!(matches!(parse(&buf), Err(Error::TruncatedResponse)));
    }
}
