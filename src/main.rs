use std::env;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use extinfo::{Error, Server};

const USAGE: &str = "\
usage: extinfo [-t SECS] HOST[:PORT] [COMMAND]

The port is the game port (default 28785); queries go to the port above.

Commands:
  info          basic server info (default)
  uptime        seconds since server start
  teams         team names and scores
  player CN     stats of the player connected as CN
  players       stats of every connected player
  all           info, teams and players in one document
";

enum Command {
    Info,
    Uptime,
    Teams,
    Player(i32),
    Players,
    All,
}

fn usage() -> ! {
    eprint!("{USAGE}");
    process::exit(2);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut timeout = None;
    let mut rest = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-t" | "--timeout" => {
                let secs: u64 = args
                    .next()
                    .unwrap_or_else(|| usage())
                    .parse()
                    .context("timeout must be a whole number of seconds")?;
                timeout = Some(Duration::from_secs(secs));
            }
            "-h" | "--help" => {
                print!("{USAGE}");
                return Ok(());
            }
            _ => rest.push(arg),
        }
    }

    let (host, command) = match rest.as_slice() {
        [host] => (host.clone(), Command::Info),
        [host, command] => (
            host.clone(),
            match command.as_str() {
                "info" => Command::Info,
                "uptime" => Command::Uptime,
                "teams" => Command::Teams,
                "players" => Command::Players,
                "all" => Command::All,
                _ => usage(),
            },
        ),
        [host, command, cn] if command == "player" => {
            let cn = cn.parse().context("CN must be an integer")?;
            (host.clone(), Command::Player(cn))
        }
        _ => usage(),
    };

    let mut server = Server::resolve(&host).await?;
    if let Some(timeout) = timeout {
        server = server.with_timeout(timeout);
    }

    let doc = match command {
        Command::Info => serde_json::to_value(server.basic_info().await?)?,
        Command::Uptime => json!({ "uptime_secs": server.uptime().await?.as_secs() }),
        Command::Teams => serde_json::to_value(server.teams_scores().await?)?,
        Command::Player(cn) => serde_json::to_value(server.player_info(cn).await?)?,
        Command::Players => serde_json::to_value(server.all_player_info().await?)?,
        Command::All => {
            let (info, teams, players) = futures::join!(
                server.basic_info(),
                server.teams_scores(),
                server.all_player_info(),
            );
            // A non-team mode is an expected answer here, not a failure.
            let teams = match teams {
                Ok(teams) => serde_json::to_value(teams)?,
                Err(Error::NotTeamMode) => serde_json::Value::Null,
                Err(e) => return Err(e.into()),
            };
            json!({
                "info": info?,
                "teams": teams,
                "players": players?,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
