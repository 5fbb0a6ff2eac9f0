pub mod section;
pub mod sidebar;
