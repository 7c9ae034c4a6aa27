use chrono::{DateTime, Utc};
use medrev_history::{Medication, RevisionStore, Snapshot};

/// Build a medication with empty notes
#[allow(dead_code)]
pub fn med(name: &str, dosage: &str, times: &[&str]) -> Medication {
    Medication::new(name, dosage, times.iter().map(|t| t.to_string()).collect())
}

/// Parse an RFC 3339 timestamp
#[allow(dead_code)]
pub fn date(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// The three-revision sample history: par alone, yu added, par's times
/// extended.
#[allow(dead_code)]
pub fn sample_history() -> RevisionStore {
    RevisionStore::from_snapshots(vec![
        Snapshot::new(
            date("2025-07-21T12:34:56Z"),
            vec![med("par", "2", &["08:34"])],
            "Initial",
        ),
        Snapshot::new(
            date("2025-07-22T09:00:00Z"),
            vec![
                med("par", "2", &["08:34"]),
                med("yu", "2", &["16:59", "20:59"]),
            ],
            "yu was added",
        ),
        Snapshot::new(
            date("2025-07-22T15:00:00Z"),
            vec![
                med("par", "2", &["08:34", "12:00"]),
                med("yu", "2", &["16:59", "20:59"]),
            ],
            "par: Times updated",
        ),
    ])
    .unwrap()
}
