use crate::domain::ids::{IdKind, new_id};
use crate::domain::menu::{Menu, MenuItem, MenuItemVariant};
use crate::editor::layout::MenuLayout;
use crate::editor::{EditorError, EditorResult, Shift};

/// Append a dish to the end of its collection and of the flat list.
pub fn add_menu_item(menu: &Menu, item: MenuItem) -> EditorResult<Menu> {
    let mut layout = MenuLayout::from_menu(menu);
    layout.push_item(item)?;
    Ok(layout.into_menu(menu))
}

/// Replace a dish in place in both lists.
///
/// A dish whose `collection_id` changed leaves its old collection and is
/// appended to the new one.
pub fn update_menu_item(menu: &Menu, item: MenuItem) -> EditorResult<Menu> {
    let mut layout = MenuLayout::from_menu(menu);

    if layout.flat_position(&item.id).is_none() {
        return Err(EditorError::item_not_found(&item.id));
    }

    let previous = layout
        .items
        .get(&item.id)
        .and_then(|current| current.collection_id.clone());

    if previous != item.collection_id {
        if let Some(collection_id) = item.collection_id.as_deref() {
            layout.require_collection(collection_id)?;
        }
        if let Some(old) = previous.as_deref().and_then(|id| layout.collection_mut(id)) {
            old.item_ids.retain(|id| *id != item.id);
        }
        if let Some(collection_id) = item.collection_id.as_deref() {
            layout
                .require_collection(collection_id)?
                .item_ids
                .push(item.id.clone());
        }
    } else if let Some(collection_id) = item.collection_id.as_deref() {
        layout.require_collection(collection_id)?;
    }

    layout.items.insert(item.id.clone(), item);
    Ok(layout.into_menu(menu))
}

/// Remove a dish from the flat list and from its collection.
pub fn remove_menu_item(menu: &Menu, item_id: &str) -> EditorResult<Menu> {
    let mut layout = MenuLayout::from_menu(menu);

    if layout.flat_position(item_id).is_none() {
        return Err(EditorError::item_not_found(item_id));
    }
    layout.detach_item(item_id);

    Ok(layout.into_menu(menu))
}

/// Append a copy of a dish with fresh item and variant identifiers.
pub fn duplicate_menu_item(menu: &Menu, item_id: &str) -> EditorResult<Menu> {
    let source = menu
        .find_item(item_id)
        .ok_or_else(|| EditorError::item_not_found(item_id))?;

    let copy = MenuItem {
        id: new_id(IdKind::Item),
        variants: source
            .variants
            .iter()
            .map(|variant| MenuItemVariant {
                id: new_id(IdKind::Variant),
                ..variant.clone()
            })
            .collect(),
        ..source.clone()
    };

    add_menu_item(menu, copy)
}

/// Move a dish one slot up in the flat list and in its collection.
pub fn move_up_menu_item(menu: &Menu, item_id: &str) -> EditorResult<Menu> {
    shift_menu_item(menu, item_id, Shift::Up)
}

/// Move a dish one slot down in the flat list and in its collection.
pub fn move_down_menu_item(menu: &Menu, item_id: &str) -> EditorResult<Menu> {
    shift_menu_item(menu, item_id, Shift::Down)
}

/// Both orders move together or not at all. Each swap uses the dish's own
/// position in that list.
fn shift_menu_item(menu: &Menu, item_id: &str, shift: Shift) -> EditorResult<Menu> {
    let mut layout = MenuLayout::from_menu(menu);

    let flat_position = layout
        .flat_position(item_id)
        .ok_or_else(|| EditorError::item_not_found(item_id))?;
    let Some(flat_target) = shift.neighbour(flat_position, layout.flat.len()) else {
        return Ok(menu.clone());
    };

    let collection_id = layout
        .items
        .get(item_id)
        .and_then(|item| item.collection_id.clone());
    if let Some(collection_id) = collection_id {
        let Some(slot) = layout.collection_mut(&collection_id) else {
            return Ok(menu.clone());
        };
        let Some(position) = slot.item_ids.iter().position(|id| id == item_id) else {
            return Ok(menu.clone());
        };
        let Some(target) = shift.neighbour(position, slot.item_ids.len()) else {
            return Ok(menu.clone());
        };
        slot.item_ids.swap(position, target);
    }

    layout.flat.swap(flat_position, flat_target);
    Ok(layout.into_menu(menu))
}
