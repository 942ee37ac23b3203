pub mod learning_panel;
pub mod markdown_view;
pub mod section;
pub mod sidebar;
