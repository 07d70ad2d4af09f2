//! Headshot URL construction. Pure string building; nothing here touches the network.

use crate::types::{Resolution, SENTINEL_PLAYER_ID};

/// NBA CDN location of the 1040x760 headshot renditions
pub const HEADSHOT_CDN_BASE: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760";

/// Generic placeholder shown when a player could not be resolved
pub const FALLBACK_HEADSHOT_URL: &str =
    "https://cdn.phenompeople.com/CareerConnectResources/NBANBAUS/social/1024x512-1670500646586.jpg";

/// Build the headshot URL for a person ID; `SENTINEL_PLAYER_ID` gets the placeholder
pub fn build_headshot_url(player_id: i64) -> String {
    if player_id == SENTINEL_PLAYER_ID {
        return FALLBACK_HEADSHOT_URL.to_string();
    }
    format!("{HEADSHOT_CDN_BASE}/{player_id}.png")
}

impl Resolution {
    /// Headshot URL for this outcome; `NotFound` gets the placeholder
    pub fn headshot_url(&self) -> String {
        build_headshot_url(self.sentinel_id())
    }
}
