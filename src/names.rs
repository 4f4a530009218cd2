//! Human-readable names for the numeric codes servers report.
//!
//! The wire format only ever carries the raw codes; these tables are the
//! client-side mapping and deliberately live outside the decoders so that
//! an unknown code (a newer server, a modded one) never fails a query. The
//! `*_name` helpers fall back to the decimal code for anything unlisted.

use std::fmt;

use enum_primitive_derive::Primitive;
use num_traits::FromPrimitive;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Primitive)]
pub enum GameMode {
    Ffa = 0,
    CoopEdit = 1,
    Teamplay = 2,
    Instagib = 3,
    InstaTeam = 4,
    Efficiency = 5,
    EfficTeam = 6,
    Tactics = 7,
    TacTeam = 8,
    Capture = 9,
    RegenCapture = 10,
    Ctf = 11,
    InstaCtf = 12,
    Protect = 13,
    InstaProtect = 14,
    Hold = 15,
    InstaHold = 16,
    EfficCtf = 17,
    EfficProtect = 18,
    EfficHold = 19,
    Collect = 20,
    InstaCollect = 21,
    EfficCollect = 22,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Ffa => "ffa",
            GameMode::CoopEdit => "coop edit",
            GameMode::Teamplay => "teamplay",
            GameMode::Instagib => "instagib",
            GameMode::InstaTeam => "insta team",
            GameMode::Efficiency => "efficiency",
            GameMode::EfficTeam => "effic team",
            GameMode::Tactics => "tactics",
            GameMode::TacTeam => "tac team",
            GameMode::Capture => "capture",
            GameMode::RegenCapture => "regen capture",
            GameMode::Ctf => "ctf",
            GameMode::InstaCtf => "insta ctf",
            GameMode::Protect => "protect",
            GameMode::InstaProtect => "insta protect",
            GameMode::Hold => "hold",
            GameMode::InstaHold => "insta hold",
            GameMode::EfficCtf => "effic ctf",
            GameMode::EfficProtect => "effic protect",
            GameMode::EfficHold => "effic hold",
            GameMode::Collect => "collect",
            GameMode::InstaCollect => "insta collect",
            GameMode::EfficCollect => "effic collect",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MasterMode {
    Auth = -1,
    Open = 0,
    Veto = 1,
    Locked = 2,
    Private = 3,
    Password = 4,
}

// Written out by hand because of the negative discriminant.
impl FromPrimitive for MasterMode {
    fn from_i64(n: i64) -> Option<Self> {
        Some(match n {
            -1 => MasterMode::Auth,
            0 => MasterMode::Open,
            1 => MasterMode::Veto,
            2 => MasterMode::Locked,
            3 => MasterMode::Private,
            4 => MasterMode::Password,
            _ => return None,
        })
    }

    fn from_u64(n: u64) -> Option<Self> {
        Self::from_i64(i64::try_from(n).ok()?)
    }
}

impl fmt::Display for MasterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MasterMode::Auth => "auth",
            MasterMode::Open => "open",
            MasterMode::Veto => "veto",
            MasterMode::Locked => "locked",
            MasterMode::Private => "private",
            MasterMode::Password => "password",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Primitive)]
pub enum Weapon {
    Chainsaw = 0,
    Shotgun = 1,
    Chaingun = 2,
    RocketLauncher = 3,
    Rifle = 4,
    GrenadeLauncher = 5,
    Pistol = 6,
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Weapon::Chainsaw => "chainsaw",
            Weapon::Shotgun => "shotgun",
            Weapon::Chaingun => "chaingun",
            Weapon::RocketLauncher => "rocket launcher",
            Weapon::Rifle => "rifle",
            Weapon::GrenadeLauncher => "grenade launcher",
            Weapon::Pistol => "pistol",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Primitive)]
pub enum Privilege {
    None = 0,
    Master = 1,
    Admin = 2,
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Privilege::None => "none",
            Privilege::Master => "master",
            Privilege::Admin => "admin",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Primitive)]
pub enum ClientState {
    Alive = 0,
    Dead = 1,
    Spawning = 2,
    Lagged = 3,
    Editing = 4,
    Spectator = 5,
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClientState::Alive => "alive",
            ClientState::Dead => "dead",
            ClientState::Spawning => "spawning",
            ClientState::Lagged => "lagged",
            ClientState::Editing => "editing",
            ClientState::Spectator => "spectator",
        })
    }
}

pub fn game_mode_name(code: i32) -> String {
    GameMode::from_i32(code).map_or_else(|| code.to_string(), |m| m.to_string())
}

pub fn master_mode_name(code: i32) -> String {
    MasterMode::from_i32(code).map_or_else(|| code.to_string(), |m| m.to_string())
}

pub fn weapon_name(code: i32) -> String {
    Weapon::from_i32(code).map_or_else(|| code.to_string(), |w| w.to_string())
}

pub fn privilege_name(code: i32) -> String {
    Privilege::from_i32(code).map_or_else(|| code.to_string(), |p| p.to_string())
}

pub fn state_name(code: i32) -> String {
    ClientState::from_i32(code).map_or_else(|| code.to_string(), |s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_names() {
        assert_eq!(game_mode_name(0), "ffa");
        assert_eq!(game_mode_name(12), "insta ctf");
        assert_eq!(game_mode_name(22), "effic collect");
        assert_eq!(master_mode_name(0), "open");
        assert_eq!(master_mode_name(3), "private");
        assert_eq!(weapon_name(3), "rocket launcher");
        assert_eq!(privilege_name(2), "admin");
        assert_eq!(state_name(5), "spectator");
    }

    #[test]
    fn auth_master_mode_is_negative() {
        assert_eq!(MasterMode::from_i32(-1), Some(MasterMode::Auth));
        assert_eq!(master_mode_name(-1), "auth");
    }

    #[test]
    fn unknown_codes_fall_back_to_decimal() {
        assert_eq!(game_mode_name(23), "23");
        assert_eq!(game_mode_name(-3), "-3");
        assert_eq!(master_mode_name(9), "9");
        assert_eq!(weapon_name(7), "7");
        assert_eq!(privilege_name(-1), "-1");
        assert_eq!(state_name(6), "6");
    }
}
