pub mod participant;
pub mod room;
