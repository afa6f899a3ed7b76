use crate::config::Config;
use crate::domain::ports::{ParticipantRepository, RoomRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub room_repo: Arc<dyn RoomRepository>,
    pub participant_repo: Arc<dyn ParticipantRepository>,
}
