use rust_decimal::Decimal;

use crate::domain::ids::{IdKind, new_id};
use crate::domain::menu::{MenuCollection, MenuItem, MenuItemVariant, NewMenu};

type SampleVariant = (Option<&'static str>, i64);
type SampleDish = (&'static str, Option<&'static str>, &'static [SampleVariant]);

const SAMPLE_MENU_NAME: &str = "Starters and main dishes";

const SAMPLE_COLLECTIONS: &[(&str, &[SampleDish])] = &[
    (
        "Appetizers",
        &[
            ("Side of chips", Some("Hand-cut potatoes, sea salt"), &[(None, 350)]),
            ("Onion rings", Some("Beer battered"), &[(None, 400)]),
            (
                "Hummus and crudités",
                Some("House hummus with fresh cut vegetables"),
                &[(Some("Small"), 600), (Some("Large"), 850)],
            ),
        ],
    ),
    (
        "Pasta and risotto",
        &[
            ("Mushroom risotto", None, &[(None, 1100)]),
            ("Pasta puttanesca", Some("Olives, capers, anchovies"), &[(None, 1150)]),
        ],
    ),
    (
        "Salads",
        &[
            (
                "Green salad",
                Some("Mixed leaves, lemon dressing"),
                &[(Some("Side"), 800), (Some("Main"), 1100)],
            ),
            (
                "Tomato salad",
                None,
                &[(Some("Side"), 850), (Some("Main"), 1150)],
            ),
        ],
    ),
];

impl NewMenu {
    /// Pre-filled demo menu for owners who want to explore the editor.
    pub fn sample() -> Self {
        let mut collections = Vec::with_capacity(SAMPLE_COLLECTIONS.len());
        let mut items = Vec::new();

        for (collection_name, dishes) in SAMPLE_COLLECTIONS {
            let collection_id = new_id(IdKind::Collection);
            let collection_items: Vec<MenuItem> = dishes
                .iter()
                .map(|(name, description, variants)| MenuItem {
                    id: new_id(IdKind::Item),
                    name: (*name).to_string(),
                    description: description.map(str::to_string),
                    variants: variants
                        .iter()
                        .map(|(variant_name, cents)| MenuItemVariant {
                            id: new_id(IdKind::Variant),
                            name: variant_name.map(str::to_string),
                            price: Some(Decimal::new(*cents, 2)),
                        })
                        .collect(),
                    collection_id: Some(collection_id.clone()),
                    image_url: None,
                })
                .collect();

            items.extend(collection_items.iter().cloned());
            collections.push(MenuCollection {
                id: collection_id,
                name: (*collection_name).to_string(),
                description: None,
                items: collection_items,
            });
        }

        NewMenu::new(SAMPLE_MENU_NAME, collections, items)
    }
}
