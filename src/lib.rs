//! Asynchronous client for the Sauerbraten extinfo query protocol.
//!
//! Sauerbraten servers answer out-of-band state queries on the UDP port
//! one above the game port: uptime, basic server info, team standings and
//! per-player stats. [`Server`] wraps one server address and exposes an
//! async method per query; the `*_raw` variants return the numeric codes
//! exactly as sent, the plain variants translate them to names.

pub mod cursor;
pub mod errors;
pub mod models;
pub mod names;
pub mod queries;
pub mod transport;

pub use errors::{Error, Result};
pub use models::*;

use std::net::SocketAddr;
use std::time::Duration;

use bytes::Bytes;
use tokio::net::lookup_host;
use tracing::debug;

use crate::queries::{basic_info, player_info, teams_scores, uptime, Request};

/// Game port servers listen on unless configured otherwise.
pub const DEFAULT_GAME_PORT: u16 = 28785;

/// Handle to one game server's info port.
///
/// Cheap to clone; holds no socket. Every query opens its own ephemeral
/// socket, so a single handle can serve any number of concurrent queries.
#[derive(Clone, Debug)]
pub struct Server {
    info_addr: SocketAddr,
    timeout: Duration,
}

impl Server {
    /// Handle for the server whose *game* port is `game_addr`; queries go
    /// to the port one above it.
    pub fn new(game_addr: SocketAddr) -> Self {
        let mut info_addr = game_addr;
        info_addr.set_port(game_addr.port().wrapping_add(1));
        Self {
            info_addr,
            timeout: transport::DEFAULT_TIMEOUT,
        }
    }

    /// Resolves `host` or `host:port` (game port, defaulting to
    /// [`DEFAULT_GAME_PORT`]) into a handle. IPv6 literals need the usual
    /// brackets, e.g. `[::1]:28785`.
    pub async fn resolve(host: &str) -> Result<Self> {
        let target = if host.contains(':') {
            host.to_owned()
        } else {
            format!("{host}:{DEFAULT_GAME_PORT}")
        };
        let addr = lookup_host(&target)
            .await?
            .next()
            .ok_or_else(|| Error::UnresolvableHost(host.to_owned()))?;
        debug!(host, %addr, "resolved game server");
        Ok(Self::new(addr))
    }

    /// Replaces the reply timeout, default [`transport::DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The address queries are sent to.
    pub fn info_addr(&self) -> SocketAddr {
        self.info_addr
    }

    /// How long the server has been running.
    pub async fn uptime(&self) -> Result<Duration> {
        let raw = self.exchange(Request::Uptime).await?;
        let secs = uptime::parse(&raw)?;
        Ok(Duration::from_secs(secs.max(0) as u64))
    }

    /// Current server state with mode codes translated to names.
    pub async fn basic_info(&self) -> Result<BasicInfo> {
        Ok(self.basic_info_raw().await?.into())
    }

    /// Current server state with numeric codes as sent.
    pub async fn basic_info_raw(&self) -> Result<BasicInfoRaw> {
        let raw = self.exchange(Request::BasicInfo).await?;
        basic_info::parse(&raw)
    }

    /// Team standings, game mode translated. Fails with
    /// [`Error::NotTeamMode`] when the current mode has no teams.
    pub async fn teams_scores(&self) -> Result<TeamsScores> {
        Ok(self.teams_scores_raw().await?.into())
    }

    /// Team standings with the numeric game mode.
    pub async fn teams_scores_raw(&self) -> Result<TeamsScoresRaw> {
        let raw = self.exchange(Request::TeamsScores).await?;
        teams_scores::parse(&raw)
    }

    /// Stats of the client connected as `cn`, codes translated.
    pub async fn player_info(&self, cn: i32) -> Result<PlayerInfo> {
        Ok(self.player_info_raw(cn).await?.into())
    }

    /// Stats of the client connected as `cn`, numeric codes as sent.
    pub async fn player_info_raw(&self, cn: i32) -> Result<PlayerInfoRaw> {
        let raw = self.exchange(Request::PlayerInfo { cn }).await?;
        player_info::parse(&raw)
    }

    /// Stats of every connected client, spectators included.
    pub async fn all_player_info(&self) -> Result<Vec<PlayerInfo>> {
        Ok(self
            .all_player_info_raw()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Stats of every connected client, numeric codes as sent.
    pub async fn all_player_info_raw(&self) -> Result<Vec<PlayerInfoRaw>> {
        let request = Request::AllPlayerInfo.to_bytes();
        let raw = transport::exchange_all(self.info_addr, &request, self.timeout).await?;
        player_info::parse_all(&raw)
    }

    async fn exchange(&self, request: Request) -> Result<Bytes> {
        transport::exchange(self.info_addr, &request.to_bytes(), self.timeout).await
    }
}
