//! Uptime reply decoding.

use crate::cursor::Cursor;
use crate::errors::Result;

/// Extracts the uptime in seconds from an uptime reply.
///
/// The reply is [class echo, sub-type echo, ack, version, uptime]; the
/// four header integers are skipped without validation, matching what
/// servers in the wild actually echo.
pub fn parse(response: &[u8]) -> Result<i32> {
    let mut cur = Cursor::new(response);
    for _ in 0..4 {
        cur.read_int()?;
    }
    cur.read_int()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cursor::put_int;
    use crate::errors::Error;
    use crate::queries::{EXT_ACK, EXT_INFO, EXT_UPTIME, EXT_VERSION};

    fn reply(uptime: i32) -> Vec<u8> {
        let mut buf = Vec::new();
        for n in [EXT_INFO, EXT_UPTIME, EXT_ACK, EXT_VERSION, uptime] {
            put_int(&mut buf, n);
        }
        buf
    }

    #[test]
    fn reads_fifth_integer() {
        assert_eq!(parse(&reply(0)).unwrap(), 0);
        assert_eq!(parse(&reply(90)).unwrap(), 90);
        // Ten days, which needs the 32-bit form on the wire.
        assert_eq!(parse(&reply(864_000)).unwrap(), 864_000);
    }

    #[test]
    fn truncated_header_is_an_error() {
        let full = reply(90);
        assert!(matches!(
            parse(&full[..3]),
            Err(Error::TruncatedResponse)
        ));
        assert!(matches!(parse(&[]), Err(Error::TruncatedResponse)));
    }
}
