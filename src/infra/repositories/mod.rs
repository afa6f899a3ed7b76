pub mod postgres_participant_repo;
pub mod postgres_room_repo;
pub mod sqlite_participant_repo;
pub mod sqlite_room_repo;
