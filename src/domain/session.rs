use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Last menu opened in the editor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LastMenu {
    pub id: String,
    pub shop_id: String,
}

/// Session hints cached in the durable local store between runs.
///
/// Keys this type does not know about are carried through unchanged so that
/// merges never drop data written by someone else.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LocalAppData {
    /// Currently selected shop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,
    /// Last menu opened in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<LastMenu>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocalAppData {
    /// Shop id to restore: the explicit selection first, then the shop of
    /// the last opened menu.
    pub fn preferred_shop_id(&self) -> Option<&str> {
        self.shop_id
            .as_deref()
            .or_else(|| self.menu.as_ref().map(|menu| menu.shop_id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let raw = r#"{"shop_id":"shop_1","theme":"dark"}"#;

        let mut data: LocalAppData = serde_json::from_str(raw).expect("parse blob");
        data.menu = Some(LastMenu {
            id: "menu_1".into(),
            shop_id: "shop_1".into(),
        });
        let written = serde_json::to_value(&data).expect("serialize blob");

        assert_eq!(written["theme"], "dark");
        assert_eq!(written["menu"]["id"], "menu_1");
        assert_eq!(written["shop_id"], "shop_1");
    }

    #[test]
    fn preferred_shop_falls_back_to_last_menu() {
        let data = LocalAppData {
            shop_id: None,
            menu: Some(LastMenu {
                id: "menu_1".into(),
                shop_id: "shop_9".into(),
            }),
            extra: Map::new(),
        };

        assert_eq!(data.preferred_shop_id(), Some("shop_9"));
    }
}
