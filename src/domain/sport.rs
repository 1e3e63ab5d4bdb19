//! Closed enumeration of the sports offered in the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Sport category of an [`super::Event`].
///
/// Serialized as the lowercase catalog id (e.g. `"futbol-sala"`). Ids the
/// catalog does not know deserialize to [`Sport::Unlisted`], which never
/// satisfies a sport selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    /// Water polo.
    Waterpolo,
    /// Athletics.
    Atletismo,
    /// Golf.
    Golf,
    /// Badminton.
    Badminton,
    /// Futsal.
    FutbolSala,
    /// Triathlon.
    Triatlon,
    /// Handball.
    Balonmano,
    /// Volleyball.
    Voleibol,
    /// Synchronized skating.
    Patinaje,
    /// Football.
    Futbol,
    /// Tennis.
    Tenis,
    /// Rugby.
    Rugby,
    /// Swimming.
    Natacion,
    /// Baseball.
    Beisbol,
    /// Basketball.
    Baloncesto,
    /// Field hockey.
    HockeyHierba,
    /// Roller hockey.
    HockeyPatines,
    /// Upstream id not present in the catalog.
    #[serde(other)]
    Unlisted,
}

impl Sport {
    /// Every sport a visitor can select, in catalog order.
    pub const ALL: [Self; 17] = [
        Self::Waterpolo,
        Self::Atletismo,
        Self::Golf,
        Self::Badminton,
        Self::FutbolSala,
        Self::Triatlon,
        Self::Balonmano,
        Self::Voleibol,
        Self::Patinaje,
        Self::Futbol,
        Self::Tenis,
        Self::Rugby,
        Self::Natacion,
        Self::Beisbol,
        Self::Baloncesto,
        Self::HockeyHierba,
        Self::HockeyPatines,
    ];

    /// Returns the wire id of this sport.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Waterpolo => "waterpolo",
            Self::Atletismo => "atletismo",
            Self::Golf => "golf",
            Self::Badminton => "badminton",
            Self::FutbolSala => "futbol-sala",
            Self::Triatlon => "triatlon",
            Self::Balonmano => "balonmano",
            Self::Voleibol => "voleibol",
            Self::Patinaje => "patinaje",
            Self::Futbol => "futbol",
            Self::Tenis => "tenis",
            Self::Rugby => "rugby",
            Self::Natacion => "natacion",
            Self::Beisbol => "beisbol",
            Self::Baloncesto => "baloncesto",
            Self::HockeyHierba => "hockey-hierba",
            Self::HockeyPatines => "hockey-patines",
            Self::Unlisted => "unlisted",
        }
    }

    /// Returns the display name shown to visitors.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Waterpolo => "Waterpolo",
            Self::Atletismo => "Atletismo",
            Self::Golf => "Golf",
            Self::Badminton => "Bádminton",
            Self::FutbolSala => "Fútbol Sala",
            Self::Triatlon => "Triatlón",
            Self::Balonmano => "Balonmano",
            Self::Voleibol => "Voleibol",
            Self::Patinaje => "Patinaje Sincronizado",
            Self::Futbol => "Fútbol",
            Self::Tenis => "Tenis",
            Self::Rugby => "Rugby",
            Self::Natacion => "Natación",
            Self::Beisbol => "Béisbol",
            Self::Baloncesto => "Baloncesto",
            Self::HockeyHierba => "Hockey Hierba",
            Self::HockeyPatines => "Hockey Patines",
            Self::Unlisted => "Otro",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Sport {
    type Err = CatalogError;

    /// Strict parse: only catalog ids are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sport| sport.id() == needle)
            .ok_or_else(|| CatalogError::InvalidRequest(format!("unknown sport: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_ids() {
        assert_eq!("futbol-sala".parse::<Sport>().ok(), Some(Sport::FutbolSala));
        assert_eq!(" Tenis ".parse::<Sport>().ok(), Some(Sport::Tenis));
    }

    #[test]
    fn rejects_unknown_ids() {
        assert!("cricket".parse::<Sport>().is_err());
        assert!("unlisted".parse::<Sport>().is_err());
    }

    #[test]
    fn serde_uses_kebab_ids() {
        let json = serde_json::to_string(&Sport::HockeyPatines).unwrap_or_default();
        assert_eq!(json, "\"hockey-patines\"");
    }

    #[test]
    fn unknown_upstream_id_is_unlisted() {
        let sport: Option<Sport> = serde_json::from_str("\"cricket\"").ok();
        assert_eq!(sport, Some(Sport::Unlisted));
    }

    #[test]
    fn ids_match_serde_names() {
        for sport in Sport::ALL {
            let json = serde_json::to_string(&sport).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", sport.id()));
        }
    }
}
