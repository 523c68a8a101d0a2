//! JSON fixture shapes for dormitory layouts.
//!
//! A layout file describes one dorm as floors of suites of rooms:
//!
//! ```json
//! {
//!   "floors": [
//!     {
//!       "suites": [
//!         {
//!           "rooms": [
//!             { "room_number": "101A", "capacity": 1 },
//!             { "room_number": "101D", "capacity": 2 }
//!           ],
//!           "alternative_pull": false
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Floor numbers are implicit: a floor's position in the array is its number.

use serde::Deserialize;

/// A whole dorm layout fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct DormLayout {
    pub floors: Vec<FloorLayout>,
}

/// One floor of a dorm.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorLayout {
    pub suites: Vec<SuiteLayout>,
}

/// One suite on a floor.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteLayout {
    pub rooms: Vec<RoomLayout>,
    #[serde(default)]
    pub alternative_pull: bool,
}

/// One room in a suite.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomLayout {
    pub room_number: String,
    pub capacity: i32,
}

impl DormLayout {
    /// Total number of suites across all floors.
    pub fn suite_count(&self) -> usize {
        self.floors.iter().map(|f| f.suites.len()).sum()
    }

    /// Total number of rooms across all floors.
    pub fn room_count(&self) -> usize {
        self.floors
            .iter()
            .flat_map(|f| &f.suites)
            .map(|s| s.rooms.len())
            .sum()
    }

    /// Total bed count across all rooms.
    pub fn bed_count(&self) -> i64 {
        self.floors
            .iter()
            .flat_map(|f| &f.suites)
            .flat_map(|s| &s.rooms)
            .map(|r| i64::from(r.capacity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
    {
        "floors": [
            {
                "suites": [
                    {
                        "rooms": [
                            { "room_number": "101A", "capacity": 1 },
                            { "room_number": "101B", "capacity": 1 },
                            { "room_number": "101D", "capacity": 2 }
                        ],
                        "alternative_pull": false
                    },
                    {
                        "rooms": [
                            { "room_number": "102A", "capacity": 1 }
                        ],
                        "alternative_pull": true
                    }
                ]
            },
            {
                "suites": [
                    {
                        "rooms": [
                            { "room_number": "201A", "capacity": 1 },
                            { "room_number": "201D", "capacity": 2 }
                        ]
                    }
                ]
            }
        ]
    }
    "#;

    #[test]
    fn test_parse_fixture() {
        let layout: DormLayout = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(layout.floors.len(), 2);
        assert_eq!(layout.suite_count(), 3);
        assert_eq!(layout.room_count(), 6);
        assert_eq!(layout.bed_count(), 8);
        assert!(layout.floors[0].suites[1].alternative_pull);
        // alternative_pull defaults to false when omitted
        assert!(!layout.floors[1].suites[0].alternative_pull);
        assert_eq!(layout.floors[1].suites[0].rooms[1].room_number, "201D");
    }
}
