pub mod header;
pub mod icon;
pub mod ui;
