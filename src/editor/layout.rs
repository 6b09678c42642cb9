use std::collections::HashMap;

use crate::domain::menu::{Menu, MenuCollection, MenuItem};
use crate::editor::{EditorError, EditorResult};

/// Collection metadata plus the within-collection order of its dishes.
#[derive(Debug, Clone)]
pub(crate) struct CollectionSlot {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub item_ids: Vec<String>,
}

/// Id-keyed working copy of a menu.
///
/// Dish data lives once in `items`; the flat order and every collection
/// order only hold ids, so both views of a dish cannot drift apart.
#[derive(Debug, Clone)]
pub(crate) struct MenuLayout {
    pub items: HashMap<String, MenuItem>,
    pub flat: Vec<String>,
    pub collections: Vec<CollectionSlot>,
}

impl MenuLayout {
    /// Load a menu. The flat copy of a dish wins over the nested one.
    pub fn from_menu(menu: &Menu) -> Self {
        let mut items = HashMap::with_capacity(menu.items.len());
        for item in &menu.items {
            items.entry(item.id.clone()).or_insert_with(|| item.clone());
        }

        let collections = menu
            .collections
            .iter()
            .map(|collection| {
                for item in &collection.items {
                    items.entry(item.id.clone()).or_insert_with(|| item.clone());
                }
                CollectionSlot {
                    id: collection.id.clone(),
                    name: collection.name.clone(),
                    description: collection.description.clone(),
                    item_ids: collection.items.iter().map(|item| item.id.clone()).collect(),
                }
            })
            .collect();

        Self {
            items,
            flat: menu.items.iter().map(|item| item.id.clone()).collect(),
            collections,
        }
    }

    /// Render the layout back into a menu carrying the header of `source`.
    pub fn into_menu(self, source: &Menu) -> Menu {
        let collections = self
            .collections
            .iter()
            .map(|slot| MenuCollection {
                id: slot.id.clone(),
                name: slot.name.clone(),
                description: slot.description.clone(),
                items: slot
                    .item_ids
                    .iter()
                    .filter_map(|id| self.items.get(id).cloned())
                    .collect(),
            })
            .collect();
        let items = self
            .flat
            .iter()
            .filter_map(|id| self.items.get(id).cloned())
            .collect();

        Menu {
            id: source.id.clone(),
            shop_id: source.shop_id.clone(),
            slug: source.slug.clone(),
            status: source.status,
            name: source.name.clone(),
            collections,
            items,
            created_at: source.created_at,
            updated_at: source.updated_at,
        }
    }

    pub fn flat_position(&self, item_id: &str) -> Option<usize> {
        self.flat.iter().position(|id| id == item_id)
    }

    pub fn collection_position(&self, collection_id: &str) -> Option<usize> {
        self.collections
            .iter()
            .position(|slot| slot.id == collection_id)
    }

    pub fn collection_mut(&mut self, collection_id: &str) -> Option<&mut CollectionSlot> {
        self.collections
            .iter_mut()
            .find(|slot| slot.id == collection_id)
    }

    pub fn require_collection(&mut self, collection_id: &str) -> EditorResult<&mut CollectionSlot> {
        self.collection_mut(collection_id)
            .ok_or_else(|| EditorError::collection_not_found(collection_id))
    }

    /// Append a new dish to its collection (when it has one) and to the flat list.
    pub fn push_item(&mut self, item: MenuItem) -> EditorResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(EditorError::DuplicateId(item.id));
        }

        if let Some(collection_id) = item.collection_id.as_deref() {
            self.require_collection(collection_id)?
                .item_ids
                .push(item.id.clone());
        }

        self.flat.push(item.id.clone());
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Drop a dish from every order it appears in.
    pub fn detach_item(&mut self, item_id: &str) -> Option<MenuItem> {
        self.flat.retain(|id| id != item_id);
        for slot in &mut self.collections {
            slot.item_ids.retain(|id| id != item_id);
        }
        self.items.remove(item_id)
    }
}
