//! Player stats reply decoding, single and bulk.

use std::net::Ipv4Addr;

use crate::cursor::Cursor;
use crate::errors::{Error, Result};
use crate::models::PlayerInfoRaw;
use crate::queries::EXT_NO_ERROR;

/// Size of one record in a bulk reply. Servers pad every per-player
/// datagram to this length, which is what makes chunked decoding possible.
pub const PLAYER_RECORD_SIZE: usize = 64;

/// Decodes a single-player reply.
///
/// The header is [class echo, sub-type echo, cn echo, ack, version,
/// status, stats marker]. A non-zero status means the server knows no
/// such cn and no record follows; the echoed cn is reported back in
/// [`Error::InvalidClientId`].
pub fn parse(response: &[u8]) -> Result<PlayerInfoRaw> {
    let mut cur = Cursor::new(response);
    cur.read_int()?; // class echo
    cur.read_int()?; // sub-type echo
    let cn = cur.read_int()?;
    cur.read_int()?; // ack
    cur.read_int()?; // version
    if cur.read_int()? != EXT_NO_ERROR {
        return Err(Error::InvalidClientId(cn));
    }
    cur.read_int()?; // stats marker
    read_player(&mut cur)
}

/// Decodes a bulk reply as one record per connected client.
///
/// The buffer is split into fixed-size chunks, each carrying the same
/// header as a single-player reply followed by one record. The header
/// markers are not re-checked per chunk; the server only emits chunks
/// for cns it knows. A length that is not a whole number of records is
/// a protocol violation rather than a short list.
pub fn parse_all(response: &[u8]) -> Result<Vec<PlayerInfoRaw>> {
    if response.len() % PLAYER_RECORD_SIZE != 0 {
        return Err(Error::MalformedBulkResponse {
            len: response.len(),
        });
    }
    response
        .chunks_exact(PLAYER_RECORD_SIZE)
        .map(|chunk| {
            let mut cur = Cursor::new(chunk);
            for _ in 0..7 {
                cur.read_int()?;
            }
            read_player(&mut cur)
        })
        .collect()
}

fn read_player(cur: &mut Cursor<'_>) -> Result<PlayerInfoRaw> {
    let client_num = cur.read_int()?;
    let ping = cur.read_int()?;
    let name = cur.read_cstring()?;
    let team = cur.read_cstring()?;
    let frags = cur.read_int()?;
    let flags = cur.read_int()?;
    let deaths = cur.read_int()?;
    let teamkills = cur.read_int()?;
    let damage = cur.read_int()?;
    let health = cur.read_int()?;
    let armour = cur.read_int()?;
    let weapon = cur.read_int()?;
    let privilege = cur.read_int()?;
    let state = cur.read_int()?;
    let ip = cur.read_bytes(4)?;

    Ok(PlayerInfoRaw {
        client_num,
        ping,
        name,
        team,
        frags,
        flags,
        deaths,
        teamkills,
        damage,
        health,
        armour,
        weapon,
        privilege,
        state,
        ip: Ipv4Addr::new(ip[0], ip[1], ip[2], ip[3]),
    })
}
