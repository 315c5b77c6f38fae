use anyhow::{Context, Result};
use serde_json::{json, Value};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const TRACKS: [&str; 7] = [
    "Angular", "Backend", "Communication", "Design", "Documentation", "Ionic", "Tooling",
];

const TOPICS: [&str; 10] = [
    "Getting Started with",
    "Deep Dive into",
    "Testing",
    "Scaling",
    "Debugging",
    "Migrating to",
    "Performance in",
    "Accessibility for",
    "Theming",
    "Shipping",
];

const SUBJECTS: [&str; 8] = [
    "Components",
    "Native Plugins",
    "Routing",
    "State Management",
    "Web APIs",
    "Offline Apps",
    "Animations",
    "Forms",
];

const ROOMS: [&str; 4] = ["Hall A", "Hall B", "Lecture Room 1", "Workshop Room"];

const SPEAKERS: [(&str, &str); 8] = [
    ("Burt Bear", "Software Engineer"),
    ("Charlie Cheetah", "Community Lead"),
    ("Donald Duck", "Product Designer"),
    ("Eva Eagle", "Developer Advocate"),
    ("Ellie Elephant", "Staff Engineer"),
    ("Gino Giraffe", "Technical Writer"),
    ("Isabella Iguana", "Engineering Manager"),
    ("Paul Puffin", "Core Team"),
];

fn slot_label(hour: u32, minute: u32) -> String {
    let (h, suffix) = match hour {
        0..=11 => (hour, "am"),
        12 => (12, "pm"),
        _ => (hour - 12, "pm"),
    };
    format!("{h}:{minute:02} {suffix}")
}

fn generate_day(rng: &mut SimpleRng, date: &str, session_id: &mut usize) -> Value {
    let mut groups = Vec::new();
    for hour in 9..17 {
        if hour == 12 {
            groups.push(json!({
                "time": slot_label(hour, 0),
                "sessions": [{
                    "name": "Lunch",
                    "timeStart": slot_label(hour, 0),
                    "timeEnd": slot_label(hour + 1, 0),
                    "location": "Main Hall",
                    "tracks": ["Food"],
                    "speakerNames": [],
                    "id": session_id.to_string(),
                }],
            }));
            *session_id += 1;
            continue;
        }

        let n_sessions = 1 + rng.below(3);
        let mut sessions = Vec::with_capacity(n_sessions);
        for room in ROOMS.iter().take(n_sessions) {
            let name = format!("{} {}", rng.pick(&TOPICS), rng.pick(&SUBJECTS));
            let n_tracks = 1 + rng.below(2);
            let tracks: Vec<&str> = (0..n_tracks).map(|_| rng.pick(&TRACKS)).collect();
            let n_speakers = rng.below(3);
            let speakers: Vec<&str> = (0..n_speakers)
                .map(|_| SPEAKERS[rng.below(SPEAKERS.len())].0)
                .collect();
            sessions.push(json!({
                "name": name,
                "description": format!("A session about {}.", name.to_lowercase()),
                "timeStart": slot_label(hour, 0),
                "timeEnd": slot_label(hour, 45),
                "location": room,
                "tracks": tracks,
                "speakerNames": speakers,
                "id": session_id.to_string(),
            }));
            *session_id += 1;
        }
        groups.push(json!({ "time": slot_label(hour, 0), "sessions": sessions }));
    }
    json!({ "date": date, "groups": groups })
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data.json".to_string());

    let mut session_id = 1;
    let schedule: Vec<Value> = ["Tuesday, April 5", "Wednesday, April 6"]
        .iter()
        .map(|date| generate_day(&mut rng, date, &mut session_id))
        .collect();

    let speakers: Vec<Value> = SPEAKERS
        .iter()
        .enumerate()
        .map(|(i, (name, role))| {
            let handle = name.split_whitespace().next().unwrap_or(*name).to_lowercase();
            json!({
                "name": name,
                "id": (i + 1).to_string(),
                "profilePic": format!("assets/img/speakers/{handle}.jpg"),
                "twitter": format!("@{handle}"),
                "about": format!("{name} is a {} at the conference host.", role.to_lowercase()),
                "location": "Everywhere",
                "email": format!("{handle}@example.org"),
                "phone": format!("+1-555-01{:02}", i),
            })
        })
        .collect();

    let map = json!([
        { "name": "Convention Center", "lat": 43.071584, "long": -89.380120, "centre": true },
        { "name": "Conference Hotel", "lat": 43.073281, "long": -89.381989 },
        { "name": "Capitol Square", "lat": 43.074395, "long": -89.381056 },
    ]);

    let document = json!({ "schedule": schedule, "speakers": speakers, "map": map });
    let text = serde_json::to_string_pretty(&document).context("serializing sample")?;
    std::fs::write(&output_path, text)
        .with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} sessions across {} days to {output_path}",
        session_id - 1,
        schedule.len()
    );
    Ok(())
}
