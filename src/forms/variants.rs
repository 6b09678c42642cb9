use serde::{Deserialize, Serialize};

use crate::domain::menu::{MenuItem, MenuItemVariant};
use crate::forms::items::{
    MenuItemForm, MenuItemFormError, MenuItemFormResult, VariantForm, parse_price,
};
use crate::forms::optional_inline_text;

/// Whether a dish is sold at one price or at several labelled prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    #[default]
    Single,
    Multiple,
}

/// Price variants of a dish while the owner edits them.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantEditor {
    mode: PriceMode,
    variants: Vec<MenuItemVariant>,
}

impl Default for VariantEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantEditor {
    /// Single price mode with one blank variant.
    pub fn new() -> Self {
        Self {
            mode: PriceMode::Single,
            variants: vec![MenuItemVariant::blank()],
        }
    }

    /// Starts from the variants of an existing dish.
    ///
    /// Several variants, or a single labelled one, open in multiple mode.
    pub fn from_item(item: &MenuItem) -> Self {
        let mut variants = item.variants.clone();
        if variants.is_empty() {
            variants.push(MenuItemVariant::blank());
        }
        let mode = if variants.len() > 1 || variants[0].name.is_some() {
            PriceMode::Multiple
        } else {
            PriceMode::Single
        };
        Self { mode, variants }
    }

    pub fn mode(&self) -> PriceMode {
        self.mode
    }

    pub fn variants(&self) -> &[MenuItemVariant] {
        &self.variants
    }

    pub fn set_name(&mut self, variant_id: &str, name: &str) -> MenuItemFormResult<()> {
        let name = optional_inline_text(Some(name));
        self.rebuild(variant_id, |variant| MenuItemVariant { name, ..variant })
    }

    /// Stores the coerced price; see [`parse_price`].
    pub fn set_price(&mut self, variant_id: &str, raw: &str) -> MenuItemFormResult<()> {
        let price = parse_price(raw);
        self.rebuild(variant_id, |variant| MenuItemVariant { price, ..variant })
    }

    /// Appends a blank variant and returns its id.
    pub fn add_variant(&mut self) -> String {
        let variant = MenuItemVariant::blank();
        let id = variant.id.clone();
        self.variants.push(variant);
        id
    }

    /// Keeps only the first variant, unlabelled, and flips the mode.
    pub fn toggle_price_mode(&mut self) {
        let first = self
            .variants
            .drain(..)
            .next()
            .map(|variant| MenuItemVariant {
                name: None,
                ..variant
            })
            .unwrap_or_else(MenuItemVariant::blank);
        self.variants = vec![first];
        self.mode = match self.mode {
            PriceMode::Single => PriceMode::Multiple,
            PriceMode::Multiple => PriceMode::Single,
        };
    }

    pub fn into_variants(self) -> Vec<MenuItemVariant> {
        self.variants
    }

    /// Writes the price rows and the price mode into a dish form.
    pub fn fill_form(self, form: &mut MenuItemForm) {
        form.single_price = self.mode == PriceMode::Single;
        form.variants = self.variants.iter().map(VariantForm::from).collect();
    }

    fn rebuild(
        &mut self,
        variant_id: &str,
        edit: impl FnOnce(MenuItemVariant) -> MenuItemVariant,
    ) -> MenuItemFormResult<()> {
        let position = self
            .variants
            .iter()
            .position(|variant| variant.id == variant_id)
            .ok_or_else(|| MenuItemFormError::UnknownVariant(variant_id.to_string()))?;
        let current = self.variants[position].clone();
        self.variants[position] = edit(current);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn new_editor_has_one_blank_variant() {
        let editor = VariantEditor::new();

        assert_eq!(editor.mode(), PriceMode::Single);
        assert_eq!(editor.variants().len(), 1);
        assert!(editor.variants()[0].price.is_none());
    }

    #[test]
    fn set_price_coerces_input() {
        let mut editor = VariantEditor::new();
        let id = editor.variants()[0].id.clone();

        editor.set_price(&id, "4.555").unwrap();
        assert_eq!(editor.variants()[0].price, Some(Decimal::new(456, 2)));

        editor.set_price(&id, "-3").unwrap();
        assert!(editor.variants()[0].price.is_none());
    }

    #[test]
    fn set_name_touches_only_the_target() {
        let mut editor = VariantEditor::new();
        editor.toggle_price_mode();
        let first = editor.variants()[0].id.clone();
        let second = editor.add_variant();

        editor.set_name(&second, "  Large ").unwrap();

        assert!(editor.variants()[0].name.is_none());
        assert_eq!(editor.variants()[1].name.as_deref(), Some("Large"));
        assert_eq!(editor.variants()[0].id, first);
    }

    #[test]
    fn unknown_variant_is_reported() {
        let mut editor = VariantEditor::new();

        assert!(matches!(
            editor.set_price("var_missing", "1"),
            Err(MenuItemFormError::UnknownVariant(id)) if id == "var_missing"
        ));
    }

    #[test]
    fn toggle_collapses_to_first_variant() {
        let mut editor = VariantEditor::new();
        editor.toggle_price_mode();
        let first = editor.variants()[0].id.clone();
        editor.set_name(&first, "Small").unwrap();
        editor.set_price(&first, "3").unwrap();
        editor.add_variant();

        editor.toggle_price_mode();

        assert_eq!(editor.mode(), PriceMode::Single);
        let variants = editor.into_variants();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].id, first);
        assert!(variants[0].name.is_none());
        assert_eq!(variants[0].price, Some(Decimal::new(3, 0)));
    }

    #[test]
    fn from_item_picks_mode() {
        let mut item = MenuItem::blank(None);
        assert_eq!(VariantEditor::from_item(&item).mode(), PriceMode::Single);

        item.variants.push(MenuItemVariant::blank());
        assert_eq!(VariantEditor::from_item(&item).mode(), PriceMode::Multiple);
    }
}
