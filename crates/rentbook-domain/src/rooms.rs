//! Static registry of rentable flats.

/// Floor blocks as `(first room, count)`; rooms are numbered consecutively
/// inside each block.
const FLOOR_BLOCKS: &[(u32, u32)] = &[
    (101, 6),
    (201, 6),
    (301, 6),
    (401, 6),
    (501, 6),
    (601, 2),
];

/// Static enumeration of valid room numbers. The registry is the only
/// authority on room existence the system consults.
pub struct RoomRegistry;

impl RoomRegistry {
    /// Lists every room number in ascending order.
    pub fn all() -> Vec<u32> {
        FLOOR_BLOCKS
            .iter()
            .flat_map(|&(first, count)| first..first + count)
            .collect()
    }

    /// Returns true when `room` belongs to one of the fixed blocks.
    pub fn contains(room: u32) -> bool {
        FLOOR_BLOCKS
            .iter()
            .any(|&(first, count)| room >= first && room < first + count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_spans_six_blocks() {
        let rooms = RoomRegistry::all();
        assert_eq!(rooms.len(), 28);
        assert_eq!(rooms.first(), Some(&101));
        assert_eq!(rooms.last(), Some(&602));
    }

    #[test]
    fn contains_matches_enumeration() {
        assert!(RoomRegistry::contains(101));
        assert!(RoomRegistry::contains(506));
        assert!(RoomRegistry::contains(602));
        assert!(!RoomRegistry::contains(107));
        assert!(!RoomRegistry::contains(603));
        assert!(!RoomRegistry::contains(100));
    }
}
