// src/fallback.rs
use crate::models::server::ServerRecord;

fn sample(
    name: &str,
    description: &str,
    players: u32,
    max_players: u32,
    endpoint: &str,
) -> ServerRecord {
    ServerRecord {
        name: name.to_string(),
        description: description.to_string(),
        locale: "sl".to_string(),
        current_players: players,
        max_players,
        endpoint: endpoint.to_string(),
        online: true,
    }
}

/// Bundled demo servers, shown when no directory could be reached.
pub fn sample_servers() -> Vec<ServerRecord> {
    vec![
        sample(
            "🇸🇮 Slovenija RolePlay Premium",
            "Največji Slovenian RP server - Igranje kot pravi državljan, realistična simulacija življenja",
            85,
            150,
            "185.169.252.100:30120",
        ),
        sample(
            "🇸🇮 Ljubljana City Server 2.0",
            "Igraj v Ljubljani - Sodoben RP server s kvalitetnimi skriptami in prijazno skupino",
            64,
            128,
            "185.169.252.101:30120",
        ),
        sample(
            "🇸🇮 Slovenski Extreme RP",
            "Adrenalinskega napolnjena doživetja - PvP, Business, Gang Role-Play",
            92,
            150,
            "185.169.252.102:30120",
        ),
        sample(
            "🇸🇮 Nova Slovenija",
            "Čisto nov projekt - Prihodnost Slovenskega RP, pride se nam",
            34,
            100,
            "185.169.252.103:30120",
        ),
        sample(
            "🇸🇮 Slovenian Business Server",
            "Fokus na poslovnem Role-Playu - Lastni podjetja, trgovine, bankomatizacija",
            45,
            128,
            "185.169.252.104:30120",
        ),
        sample(
            "🇸🇮 Mariborski RP",
            "Lokalno namenjen server - Igraj v Mariboru z lokalnim komunti",
            28,
            100,
            "185.169.252.105:30120",
        ),
    ]
}
