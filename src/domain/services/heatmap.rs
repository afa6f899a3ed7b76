use crate::domain::models::participant::Participant;

/// Aggregates every participant's availability into a per-slot count.
/// Pure function of its inputs; recomputed on every read or update rather
/// than cached.
///
/// Bitsets shorter than `total_slots` only contribute the indices they
/// cover; the remainder counts as unavailable. Longer bitsets are cut off
/// at `total_slots`. Ragged data should not occur, but a stale row must
/// not take the whole room snapshot down with it.
pub fn compute(total_slots: usize, participants: &[Participant]) -> Vec<u32> {
    let mut heatmap = vec![0u32; total_slots];
    for participant in participants {
        for (i, byte) in participant.availability.bytes().take(total_slots).enumerate() {
            if byte == b'1' {
                heatmap[i] += 1;
            }
        }
    }
    heatmap
}

/// Whether a participant marked the given slot. Out-of-range indices read
/// as unavailable, mirroring the ragged tolerance of `compute`.
pub fn is_available_at(participant: &Participant, slot_index: usize) -> bool {
    participant.availability.as_bytes().get(slot_index) == Some(&b'1')
}
