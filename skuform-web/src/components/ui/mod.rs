pub mod option_group_panel;
pub mod option_row;
pub mod submit_bar;
