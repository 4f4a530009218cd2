//! UDP exchange with a server's info port.
//!
//! Every exchange uses a fresh ephemeral socket: queries are rare and
//! tiny, and a connected one-shot socket means replies from anything but
//! the queried server are dropped by the kernel instead of confusing the
//! decoders.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use bytes::{BufMut, Bytes, BytesMut};
use tokio::net::UdpSocket;
use tokio::time;
use tracing::{debug, trace};

use crate::errors::{Error, Result};
use crate::queries::player_info::PLAYER_RECORD_SIZE;

/// How long to wait for the first reply datagram.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long a multi-datagram reply may pause before it counts as complete.
const REPLY_QUIET_PERIOD: Duration = Duration::from_millis(250);

async fn bound_socket(target: SocketAddr) -> Result<UdpSocket> {
    let bind_addr = match target {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    };
    let socket = UdpSocket::bind(bind_addr).await?;
    socket.connect(target).await?;
    Ok(socket)
}

/// Sends `request` and returns the single reply datagram.
pub async fn exchange(target: SocketAddr, request: &[u8], timeout: Duration) -> Result<Bytes> {
    let socket = bound_socket(target).await?;
    trace!(%target, request = %hex::encode(request), "sending query");
    socket.send(request).await?;

    let mut buf = [0u8; 1024];
    let n = time::timeout(timeout, socket.recv(&mut buf))
        .await
        .map_err(|_| Error::Timeout)??;
    trace!(%target, reply = %hex::encode(&buf[..n]), "received reply");
    debug!(%target, bytes = n, "query complete");
    Ok(Bytes::copy_from_slice(&buf[..n]))
}

/// Sends `request` and collects a burst of reply datagrams.
///
/// Bulk replies arrive as one datagram per record. Each datagram is laid
/// into a [`PLAYER_RECORD_SIZE`] slot, short ones zero padded, so the
/// result can be decoded by fixed-stride chunking. The first datagram is
/// awaited with the full `timeout`; after that the burst is drained until
/// the server goes quiet.
pub async fn exchange_all(target: SocketAddr, request: &[u8], timeout: Duration) -> Result<Bytes> {
    let socket = bound_socket(target).await?;
    trace!(%target, request = %hex::encode(request), "sending bulk query");
    socket.send(request).await?;

    let mut out = BytesMut::new();

    let mut slot = [0u8; PLAYER_RECORD_SIZE];
    let n = time::timeout(timeout, socket.recv(&mut slot))
        .await
        .map_err(|_| Error::Timeout)??;
    trace!(%target, bytes = n, "bulk datagram");
    out.put_slice(&slot);

    loop {
        let mut slot = [0u8; PLAYER_RECORD_SIZE];
        match time::timeout(REPLY_QUIET_PERIOD, socket.recv(&mut slot)).await {
            Ok(received) => {
                let n = received?;
                trace!(%target, bytes = n, "bulk datagram");
                out.put_slice(&slot);
            }
            Err(_) => break,
        }
    }

    debug!(
        %target,
        datagrams = out.len() / PLAYER_RECORD_SIZE,
        "bulk query complete"
    );
    Ok(out.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fake_server(replies: Vec<Vec<u8>>) -> SocketAddr {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        tokio::spawn(async move {
            let mut buf = [0u8; 64];
            let (_, peer) = socket.recv_from(&mut buf).await.unwrap();
            for reply in replies {
                socket.send_to(&reply, peer).await.unwrap();
            }
        });
        addr
    }

    #[tokio::test]
    async fn exchanges_one_datagram() {
        let addr = fake_server(vec![vec![1, 2, 3]]).await;
        let reply = exchange(addr, &[0, 0, 0], Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(&reply[..], &[1, 2, 3]);
    }

    #[tokio::test]
    async fn missing_reply_times_out() {
        // Bound but mute, so the request is neither answered nor refused.
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        let res = exchange(addr, &[0, 0, 0], Duration::from_millis(50)).await;
        assert!(matches!(res, Err(Error::Timeout)));
    }

    #[tokio::test]
    async fn bulk_datagrams_land_in_fixed_slots() {
        let addr = fake_server(vec![vec![7; 40], vec![9; PLAYER_RECORD_SIZE]]).await;
        let reply = exchange_all(addr, &[0, 1, 0xff], Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(reply.len(), 2 * PLAYER_RECORD_SIZE);
        assert_eq!(&reply[..40], &[7u8; 40][..]);
        assert_eq!(&reply[40..PLAYER_RECORD_SIZE], &[0u8; 24][..]);
        assert_eq!(&reply[PLAYER_RECORD_SIZE..], &[9u8; PLAYER_RECORD_SIZE][..]);
    }
}
