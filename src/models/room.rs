//! Room model.
//!
//! Rooms are partitioned by [`RoomType`] for assignment eligibility: lab
//! sessions require a `Laboratory`, all other sessions may use any
//! non-`Laboratory` room.

use serde::{Deserialize, Serialize};

/// A physical room that class sessions can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity (must be `>= 1`).
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
}

/// Room classification for assignment eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// Equipped for lab sessions; the only room type lab sessions may use.
    Laboratory,
    /// Large lecture venue.
    LectureHall,
    /// Ordinary classroom.
    Classroom,
    /// Small seminar room.
    SeminarRoom,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            room_type,
        }
    }

    /// Whether this room is eligible for a session of the given subject type.
    ///
    /// Lab sessions require [`RoomType::Laboratory`]; all other subject
    /// types require a non-laboratory room.
    pub fn eligible_for_lab(&self, is_lab: bool) -> bool {
        matches!(self.room_type, RoomType::Laboratory) == is_lab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("R1", "Room 1", 40, RoomType::LectureHall);
        assert_eq!(r.id, "R1");
        assert_eq!(r.capacity, 40);
        assert_eq!(r.room_type, RoomType::LectureHall);
    }

    #[test]
    fn test_lab_eligibility() {
        let lab = Room::new("L1", "Lab 1", 30, RoomType::Laboratory);
        let hall = Room::new("H1", "Hall 1", 30, RoomType::LectureHall);

        assert!(lab.eligible_for_lab(true));
        assert!(!lab.eligible_for_lab(false));
        assert!(!hall.eligible_for_lab(true));
        assert!(hall.eligible_for_lab(false));
    }
}
