//! Fixed dataset written to an empty store on first start.

use chrono::{DateTime, Utc};

use crate::models::{to_iso_string, Job, JobCategory};

/// The four demo listings every fresh installation starts with.
///
/// The Police listing carries a deadline in the past so the expired state is
/// visible from the first run.
pub fn initial_jobs(now: DateTime<Utc>) -> Vec<Job> {
    let posted = to_iso_string(now);

    vec![
        Job {
            id: "1".to_string(),
            title: "Probationary Officer (PO)".to_string(),
            department: "State Bank of India".to_string(),
            qualification: "Graduate".to_string(),
            location: "All India".to_string(),
            last_date: "2025-12-31".to_string(),
            apply_link: "#".to_string(),
            notification_link: "#".to_string(),
            description: "Recruitment of Probationary Officers in State Bank of India.".to_string(),
            category: JobCategory::Bank,
            posted_date: posted.clone(),
        },
        Job {
            id: "2".to_string(),
            title: "Assistant Loco Pilot".to_string(),
            department: "Indian Railways".to_string(),
            qualification: "10th + ITI".to_string(),
            location: "All India".to_string(),
            last_date: "2025-10-15".to_string(),
            apply_link: "#".to_string(),
            notification_link: "#".to_string(),
            description: "RRB ALP Recruitment 2025 for various zones.".to_string(),
            category: JobCategory::Railway,
            posted_date: posted.clone(),
        },
        Job {
            id: "3".to_string(),
            title: "Sub Inspector".to_string(),
            department: "UP Police".to_string(),
            qualification: "Graduate".to_string(),
            location: "Uttar Pradesh".to_string(),
            last_date: "2024-01-01".to_string(),
            apply_link: "#".to_string(),
            notification_link: "#".to_string(),
            description: "Uttar Pradesh Police Recruitment and Promotion Board.".to_string(),
            category: JobCategory::Police,
            posted_date: "2023-12-01T10:00:00.000Z".to_string(),
        },
        Job {
            id: "4".to_string(),
            title: "Civil Services Exam".to_string(),
            department: "UPSC".to_string(),
            qualification: "Graduate".to_string(),
            location: "All India".to_string(),
            last_date: "2025-03-20".to_string(),
            apply_link: "#".to_string(),
            notification_link: "#".to_string(),
            description: "Union Public Service Commission CSE 2025.".to_string(),
            category: JobCategory::Upsc,
            posted_date: posted,
        },
    ]
}
