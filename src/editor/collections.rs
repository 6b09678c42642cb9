use crate::domain::ids::{IdKind, new_id};
use crate::domain::menu::{DEFAULT_COLLECTION_NAME, Menu, MenuItem};
use crate::editor::layout::{CollectionSlot, MenuLayout};
use crate::editor::{EditorError, EditorResult, Shift};

/// Append an "Untitled collection" holding one default dish.
///
/// Collections are never created empty: the editor needs a row to edit.
pub fn add_collection(menu: &Menu) -> EditorResult<Menu> {
    let mut layout = MenuLayout::from_menu(menu);

    let collection_id = new_id(IdKind::Collection);
    layout.collections.push(CollectionSlot {
        id: collection_id.clone(),
        name: DEFAULT_COLLECTION_NAME.to_string(),
        description: Some(String::new()),
        item_ids: Vec::new(),
    });
    layout.push_item(MenuItem::blank(Some(collection_id)))?;

    Ok(layout.into_menu(menu))
}

/// Give a menu without collections its default collection; other menus pass through.
pub fn ensure_collection(menu: &Menu) -> EditorResult<Menu> {
    if menu.collections.is_empty() {
        add_collection(menu)
    } else {
        Ok(menu.clone())
    }
}

/// Replace the name and description of a collection.
pub fn update_collection(
    menu: &Menu,
    collection_id: &str,
    name: impl Into<String>,
    description: Option<String>,
) -> EditorResult<Menu> {
    let mut layout = MenuLayout::from_menu(menu);

    let slot = layout.require_collection(collection_id)?;
    slot.name = name.into();
    slot.description = description;

    Ok(layout.into_menu(menu))
}

/// Delete a collection together with every dish that belongs to it.
pub fn remove_collection(menu: &Menu, collection_id: &str) -> EditorResult<Menu> {
    let mut layout = MenuLayout::from_menu(menu);

    let position = layout
        .collection_position(collection_id)
        .ok_or_else(|| EditorError::collection_not_found(collection_id))?;
    let slot = layout.collections.remove(position);

    let owned: Vec<String> = layout
        .items
        .values()
        .filter(|item| item.collection_id.as_deref() == Some(collection_id))
        .map(|item| item.id.clone())
        .chain(slot.item_ids)
        .collect();
    for item_id in owned {
        layout.detach_item(&item_id);
    }

    Ok(layout.into_menu(menu))
}

/// Swap a collection with its predecessor. The first collection stays put.
pub fn move_up_collection(menu: &Menu, collection_id: &str) -> EditorResult<Menu> {
    let position = menu
        .collections
        .iter()
        .position(|collection| collection.id == collection_id)
        .ok_or_else(|| EditorError::collection_not_found(collection_id))?;

    Ok(swap_collection(menu, position, Shift::Up))
}

/// Swap a collection with its successor. The last or an unknown collection
/// leaves the menu unchanged.
pub fn move_down_collection(menu: &Menu, collection_id: &str) -> EditorResult<Menu> {
    let position = menu
        .collections
        .iter()
        .position(|collection| collection.id == collection_id);

    Ok(match position {
        Some(position) => swap_collection(menu, position, Shift::Down),
        None => menu.clone(),
    })
}

fn swap_collection(menu: &Menu, position: usize, shift: Shift) -> Menu {
    let mut updated = menu.clone();
    if let Some(target) = shift.neighbour(position, updated.collections.len()) {
        updated.collections.swap(position, target);
    }
    updated
}
