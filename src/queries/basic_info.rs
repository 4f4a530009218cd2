//! Basic server info reply decoding.

use crate::cursor::Cursor;
use crate::errors::Result;
use crate::models::BasicInfoRaw;

/// Decodes a basic info reply.
///
/// Field order on the wire: class echo, client count, attribute count
/// (always 5), protocol version, game mode, seconds left, max clients,
/// master mode, then map name and server description as strings.
pub fn parse(response: &[u8]) -> Result<BasicInfoRaw> {
    let mut cur = Cursor::new(response);
    cur.read_int()?; // class echo
    let clients = cur.read_int()?;
    cur.read_int()?; // attribute count
    let protocol_version = cur.read_int()?;
    let game_mode = cur.read_int()?;
    let secs_left = cur.read_int()?;
    let max_clients = cur.read_int()?;
    let master_mode = cur.read_int()?;
    let map = cur.read_cstring()?;
    let description = cur.read_cstring()?;

    Ok(BasicInfoRaw {
        clients,
        protocol_version,
        game_mode,
        secs_left,
        max_clients,
        master_mode,
        map,
        description,
    })
}
