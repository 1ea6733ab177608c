//! The activities offered at process start.

use mergington::data::Activity;
use mergington::id::ActivityName;

/// Returns the seeded activities in their display order.
pub fn seed_activities() -> Vec<(ActivityName, Activity)> {
    vec![
        (
            "Chess Club".into(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".into(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".into(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Debate Team".into(),
            Activity::new(
                "Develop critical thinking and public speaking skills through competitive debates",
                "Wednesdays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Science Olympiad".into(),
            Activity::new(
                "Compete in science and engineering challenges",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["sarah@mergington.edu", "james@mergington.edu"]),
        ),
        (
            "Basketball Team".into(),
            Activity::new(
                "Competitive basketball practices and games",
                "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["chris@mergington.edu", "marcus@mergington.edu"]),
        ),
        (
            "Track and Field".into(),
            Activity::new(
                "Running, jumping, and throwing events training",
                "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
                25,
            )
            .with_participants(["lisa@mergington.edu"]),
        ),
        (
            "Drama Club".into(),
            Activity::new(
                "Perform in school plays and develop acting skills",
                "Tuesdays and Fridays, 3:30 PM - 5:30 PM",
                20,
            )
            .with_participants(["emily@mergington.edu", "ryan@mergington.edu"]),
        ),
        (
            "Art Studio".into(),
            Activity::new(
                "Explore various art mediums including painting, drawing, and sculpture",
                "Mondays and Thursdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["maria@mergington.edu"]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeds_nine_unique_activities() {
        let seeds = seed_activities();
        assert_eq!(seeds.len(), 9);

        let names: HashSet<_> = seeds.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn seeded_rosters_are_valid() {
        for (name, activity) in seed_activities() {
            assert!(activity.max_participants > 0, "{name} has no capacity");
            assert!(
                activity.participants.len() <= activity.max_participants,
                "{name} is over capacity"
            );

            let unique: HashSet<_> = activity.participants.iter().collect();
            assert_eq!(unique.len(), activity.participants.len(), "{name} has duplicates");
        }
    }
}
