// Activities offered at startup. The set of names never changes afterwards.

use crate::modules::activities::core::activity::Activity;

pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Basketball Team",
            "Practice drills and compete in inter-school basketball games",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
            &["james@mergington.edu", "lucas@mergington.edu"],
        ),
        Activity::new(
            "Tennis Club",
            "Improve your serve and play singles and doubles matches",
            "Wednesdays, 3:30 PM - 5:00 PM",
            10,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Act, direct, and stage school theater productions",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            25,
            &["isabella@mergington.edu", "ethan@mergington.edu"],
        ),
        Activity::new(
            "Art Studio",
            "Explore painting, drawing, and sculpture",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        Activity::new(
            "Math Club",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            16,
            &["benjamin@mergington.edu", "charlotte@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Research current topics and argue them in debate tournaments",
            "Fridays, 4:00 PM - 5:30 PM",
            14,
            &["henry@mergington.edu", "evelyn@mergington.edu"],
        ),
    ]
}
