pub mod context_menu;
pub mod flow;
pub mod sidebar;
mod transfer;
