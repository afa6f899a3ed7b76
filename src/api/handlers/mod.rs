pub mod health;
pub mod participant;
pub mod room;
pub mod slot;
