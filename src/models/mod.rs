pub mod menu;
pub mod shop;
