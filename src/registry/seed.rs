//! Fixed activity catalog loaded at startup.
//!
//! The registry is seeded once and activities are never created or deleted at
//! runtime; only the rosters change.

use std::collections::BTreeMap;

use crate::models::Activity;

fn activity(
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The Mergington High School activity catalog.
pub fn mergington_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();
    activities.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Soccer Team".to_string(),
        activity(
            "Competitive soccer training and matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            18,
            &["alex@mergington.edu"],
        ),
    );
    activities.insert(
        "Basketball Club".to_string(),
        activity(
            "Basketball practice and tournament participation",
            "Mondays, Wednesdays, 5:00 PM - 6:30 PM",
            15,
            &["james@mergington.edu", "lucas@mergington.edu"],
        ),
    );
    activities.insert(
        "Art Studio".to_string(),
        activity(
            "Painting, drawing, and visual arts exploration",
            "Wednesdays, 3:30 PM - 5:00 PM",
            16,
            &["isabella@mergington.edu"],
        ),
    );
    activities.insert(
        "Music Ensemble".to_string(),
        activity(
            "Learn instruments and perform in concerts",
            "Mondays and Fridays, 4:00 PM - 5:00 PM",
            24,
            &["aiden@mergington.edu", "mia@mergington.edu"],
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        activity(
            "Develop public speaking and argumentation skills",
            "Tuesdays, 3:30 PM - 5:00 PM",
            14,
            &["grace@mergington.edu"],
        ),
    );
    activities.insert(
        "Science Club".to_string(),
        activity(
            "Conduct experiments and explore scientific concepts",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
            &["ryan@mergington.edu", "zoe@mergington.edu"],
        ),
    );
    activities
}
