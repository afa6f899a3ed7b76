use crate::error::AppError;
use std::fmt;

/// Per-participant availability, one bit per hour slot. The canonical
/// wire/storage form is an ASCII string of '0'/'1' characters with no
/// separators, whose length equals the owning room's total slot count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityBitset {
    bits: Vec<bool>,
}

impl AvailabilityBitset {
    /// All-zero bitset, the state every participant starts in.
    pub fn empty(total_slots: usize) -> Self {
        Self {
            bits: vec![false; total_slots],
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        let mut bits = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => {
                    return Err(AppError::Validation(format!(
                        "Availability may only contain '0' or '1', found {:?} at position {}",
                        c, i
                    )));
                }
            }
        }
        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_available(&self, slot_index: usize) -> Result<bool, AppError> {
        self.bits
            .get(slot_index)
            .copied()
            .ok_or_else(|| out_of_range(slot_index, self.bits.len()))
    }

    pub fn set(&mut self, slot_index: usize, value: bool) -> Result<(), AppError> {
        let len = self.bits.len();
        match self.bits.get_mut(slot_index) {
            Some(bit) => {
                *bit = value;
                Ok(())
            }
            None => Err(out_of_range(slot_index, len)),
        }
    }

    /// Number of marked slots ("N slots selected" in the UI).
    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

impl fmt::Display for AvailabilityBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

fn out_of_range(slot_index: usize, len: usize) -> AppError {
    AppError::Validation(format!(
        "Slot index {} out of range for bitset of length {}",
        slot_index, len
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bitset_is_all_zero() {
        let bitset = AvailabilityBitset::empty(48);
        assert_eq!(bitset.len(), 48);
        assert_eq!(bitset.count_set(), 0);
        assert_eq!(bitset.to_string(), "0".repeat(48));
    }

    #[test]
    fn parse_round_trips_through_display() {
        let wire = "010110";
        let bitset = AvailabilityBitset::parse(wire).unwrap();
        assert_eq!(bitset.to_string(), wire);
        assert_eq!(bitset.count_set(), 3);
        assert!(!bitset.is_available(0).unwrap());
        assert!(bitset.is_available(1).unwrap());
    }

    #[test]
    fn parse_rejects_foreign_characters() {
        let err = AvailabilityBitset::parse("0102").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(AvailabilityBitset::parse("01 0").is_err());
    }

    #[test]
    fn set_and_read_back() {
        let mut bitset = AvailabilityBitset::empty(24);
        bitset.set(5, true).unwrap();
        bitset.set(23, true).unwrap();
        assert!(bitset.is_available(5).unwrap());
        assert_eq!(bitset.count_set(), 2);
        bitset.set(5, false).unwrap();
        assert_eq!(bitset.count_set(), 1);
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut bitset = AvailabilityBitset::empty(24);
        assert!(bitset.is_available(24).is_err());
        assert!(bitset.set(24, true).is_err());
    }
}
