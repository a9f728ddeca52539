//! Selection of the newest TFT set out of a champion catalog.
//!
//! Champion identifiers embed their set as `TFTSet<digits>` (for example
//! `TFT10_Jinx` has the id `Characters/TFTSet10_Jinx` in some versions and
//! `TFTSet10_Jinx` in others, so we search rather than anchor). Identifiers
//! without a recognizable set number never participate in selection.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::ddragon::{Champion, ChampionCatalog};

lazy_static! {
    static ref SET_PATTERN: Regex = Regex::new(r"TFTSet(\d+)").unwrap();
}

/// Extracts the set number embedded in a champion identifier, if any.
pub fn set_number(champion_id: &str) -> Option<u32> {
    SET_PATTERN
        .captures(champion_id)
        .and_then(|captures| captures[1].parse().ok())
}

/// The highest set number present anywhere in the catalog, or `None` if no
/// identifier carries one.
pub fn newest_set(catalog: &ChampionCatalog) -> Option<u32> {
    catalog.data.keys().filter_map(|id| set_number(id)).max()
}

/// All champions belonging to the newest set, paired with that set's number.
/// Champions from older sets or with unrecognizable identifiers are dropped.
pub fn newest_set_members(catalog: &ChampionCatalog) -> Option<(u32, Vec<(&str, &Champion)>)> {
    let newest = newest_set(catalog)?;

    let members = catalog
        .data
        .iter()
        .filter(|(id, _)| match set_number(id) {
            Some(set) => set == newest,
            None => {
                debug!("champion id {} has no set number, skipping", id);
                false
            }
        })
        .map(|(id, champion)| (id.as_str(), champion))
        .collect();

    Some((newest, members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ddragon::ChampionImage;

    fn champion(name: &str, tier: u32, image: &str) -> Champion {
        Champion {
            name: name.to_string(),
            tier,
            image: ChampionImage {
                full: image.to_string(),
            },
        }
    }

    fn catalog(entries: Vec<(&str, Champion)>) -> ChampionCatalog {
        ChampionCatalog {
            data: entries
                .into_iter()
                .map(|(id, champion)| (id.to_string(), champion))
                .collect(),
        }
    }

    #[test]
    fn extracts_set_numbers() {
        assert_eq!(set_number("TFTSet9_Ahri"), Some(9));
        assert_eq!(set_number("Characters/TFTSet13_Jinx"), Some(13));
        assert_eq!(set_number("TFT_Ahri"), None);
        assert_eq!(set_number(""), None);
    }

    #[test]
    fn picks_maximum_set_regardless_of_order() {
        let catalog = catalog(vec![
            ("TFTSet10_Jinx", champion("Jinx", 4, "jinx.png")),
            ("TFTSet9_Ahri", champion("Ahri", 2, "ahri.png")),
            ("TFTSet8_Sona", champion("Sona", 3, "sona.png")),
        ]);

        let (newest, members) = newest_set_members(&catalog).unwrap();
        assert_eq!(newest, 10);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].0, "TFTSet10_Jinx");
        assert_eq!(members[0].1.name, "Jinx");
    }

    #[test]
    fn unrecognizable_ids_are_dropped_not_fatal() {
        let catalog = catalog(vec![
            ("TFTSet11_Kayn", champion("Kayn", 5, "kayn.png")),
            ("TFT_Tutorial_Dummy", champion("Dummy", 1, "dummy.png")),
        ]);

        let (newest, members) = newest_set_members(&catalog).unwrap();
        assert_eq!(newest, 11);
        assert_eq!(members.len(), 1);
    }

    #[test]
    fn no_recognizable_sets_yields_none() {
        let catalog = catalog(vec![
            ("TFT_Tutorial_Dummy", champion("Dummy", 1, "dummy.png")),
            ("SomethingElse", champion("Other", 2, "other.png")),
        ]);

        assert_eq!(newest_set(&catalog), None);
        assert!(newest_set_members(&catalog).is_none());
    }

    #[test]
    fn catalog_json_parses_expected_fields() {
        let body = r#"{
            "type": "champion",
            "version": "14.1.1",
            "data": {
                "TFTSet9_Ahri": {
                    "name": "Ahri",
                    "tier": 2,
                    "image": {"full": "ahri.png", "sprite": "tft-champion0.png", "w": 48, "h": 48}
                },
                "TFTSet10_Jinx": {
                    "name": "Jinx",
                    "tier": 4,
                    "image": {"full": "jinx.png", "sprite": "tft-champion1.png", "w": 48, "h": 48}
                }
            }
        }"#;

        let catalog: ChampionCatalog = serde_json::from_str(body).unwrap();
        let (newest, members) = newest_set_members(&catalog).unwrap();

        assert_eq!(newest, 10);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].1.image.full, "jinx.png");
        assert_eq!(members[0].1.tier, 4);
    }
}
