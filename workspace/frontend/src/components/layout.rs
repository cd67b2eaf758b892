pub mod layout;
mod header;
mod sidebar;
