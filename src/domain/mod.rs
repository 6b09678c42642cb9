pub mod ids;
pub mod menu;
pub mod sample;
pub mod session;
pub mod shop;
