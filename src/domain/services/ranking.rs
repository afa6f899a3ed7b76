use crate::domain::models::participant::Participant;
use crate::domain::services::heatmap;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BestSlot {
    pub slot_index: usize,
    pub participant_count: u32,
    pub available_participants: Vec<String>,
}

/// Ranks every slot someone is available for: participant count descending,
/// slot index ascending on ties. Slots nobody marked are omitted. Consumers
/// usually show the top five, but truncation is theirs to do.
pub fn rank(heatmap: &[u32], participants: &[Participant]) -> Vec<BestSlot> {
    let mut slots: Vec<BestSlot> = heatmap
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(slot_index, count)| BestSlot {
            slot_index,
            participant_count: *count,
            available_participants: participants
                .iter()
                .filter(|p| heatmap::is_available_at(p, slot_index))
                .map(|p| p.name.clone())
                .collect(),
        })
        .collect();

    slots.sort_by(|a, b| {
        b.participant_count
            .cmp(&a.participant_count)
            .then(a.slot_index.cmp(&b.slot_index))
    });
    slots
}
