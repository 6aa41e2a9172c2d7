pub mod chat;
pub mod findings;
pub mod reference;
pub mod sidebar;
