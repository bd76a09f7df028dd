//! Filter engine for the public listing and the admin dashboard.
//!
//! Everything here is a pure function over a slice of jobs; nothing touches storage.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{CategoryCount, DashboardStats, FilterCriteria, Job};

/// Jobs matching every non-empty criterion, in input order.
///
/// `search` matches title or department as a case-insensitive substring;
/// the other criteria must equal the job's field exactly.
pub fn filter_jobs<'a>(jobs: &'a [Job], criteria: &FilterCriteria) -> Vec<&'a Job> {
    let needle = criteria.search.to_lowercase();

    jobs.iter()
        .filter(|job| {
            needle.is_empty()
                || job.title.to_lowercase().contains(&needle)
                || job.department.to_lowercase().contains(&needle)
        })
        .filter(|job| {
            criteria.qualification.is_empty() || job.qualification == criteria.qualification
        })
        .filter(|job| criteria.location.is_empty() || job.location == criteria.location)
        .filter(|job| criteria.category.is_empty() || job.category.as_str() == criteria.category)
        .collect()
}

/// Parse a stored deadline.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates, the latter at
/// midnight UTC.
pub fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

/// Whether the application deadline is strictly before `now`.
///
/// A deadline that cannot be parsed never expires.
pub fn is_expired(job: &Job, now: DateTime<Utc>) -> bool {
    parse_deadline(&job.last_date).is_some_and(|deadline| deadline < now)
}

/// Summary counts for the admin dashboard.
///
/// Category counts follow the order in which each category first appears.
pub fn dashboard_stats(jobs: &[Job], now: DateTime<Utc>) -> DashboardStats {
    let today = now.date_naive();

    let posted_today = jobs
        .iter()
        .filter_map(|job| DateTime::parse_from_rfc3339(&job.posted_date).ok())
        .filter(|posted| posted.with_timezone(&Utc).date_naive() == today)
        .count();

    let expired = jobs.iter().filter(|job| is_expired(job, now)).count();

    let mut by_category: Vec<CategoryCount> = Vec::new();
    for job in jobs {
        let name = job.category.as_str();
        match by_category.iter_mut().find(|c| c.name == name) {
            Some(count) => count.value += 1,
            None => by_category.push(CategoryCount {
                name: name.to_string(),
                value: 1,
            }),
        }
    }

    DashboardStats {
        total: jobs.len(),
        posted_today,
        expired,
        by_category,
    }
}

/// Ticker lines for the newest `limit` jobs.
pub fn latest_headlines(jobs: &[Job], limit: usize) -> Vec<String> {
    jobs.iter()
        .take(limit)
        .map(|job| format!("{} @ {}", job.title, job.department))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initial_jobs;
    use crate::models::JobCategory;
    use chrono::{Duration, TimeZone};

    fn seed() -> Vec<Job> {
        initial_jobs(Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap())
    }

    fn criteria(
        search: &str,
        qualification: &str,
        location: &str,
        category: &str,
    ) -> FilterCriteria {
        FilterCriteria {
            search: search.to_string(),
            qualification: qualification.to_string(),
            location: location.to_string(),
            category: category.to_string(),
        }
    }

    fn ids<'a>(jobs: &[&'a Job]) -> Vec<&'a str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let jobs = seed();
        let result = filter_jobs(&jobs, &FilterCriteria::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_category_filter() {
        let jobs = seed();
        let result = filter_jobs(&jobs, &criteria("", "", "", "Bank"));
        assert_eq!(ids(&result), vec!["1"]);
        assert!(result.iter().all(|j| j.category == JobCategory::Bank));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_department() {
        let jobs = seed();

        assert_eq!(ids(&filter_jobs(&jobs, &criteria("loco", "", "", ""))), vec!["2"]);
        assert_eq!(ids(&filter_jobs(&jobs, &criteria("RAILWAYS", "", "", ""))), vec!["2"]);
        assert_eq!(ids(&filter_jobs(&jobs, &criteria("upsc", "", "", ""))), vec!["4"]);
    }

    #[test]
    fn test_search_ignores_description() {
        let jobs = seed();
        let result = filter_jobs(&jobs, &criteria("Promotion Board", "", "", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let jobs = seed();

        let graduates_all_india = filter_jobs(&jobs, &criteria("", "Graduate", "All India", ""));
        assert_eq!(ids(&graduates_all_india), vec!["1", "4"]);

        let narrowed = filter_jobs(&jobs, &criteria("civil", "Graduate", "All India", "UPSC"));
        assert_eq!(ids(&narrowed), vec!["4"]);

        let contradictory = filter_jobs(&jobs, &criteria("", "", "Uttar Pradesh", "Bank"));
        assert!(contradictory.is_empty());
    }

    #[test]
    fn test_exact_match_on_qualification() {
        let jobs = seed();
        assert!(filter_jobs(&jobs, &criteria("", "graduate", "", "")).is_empty());
        assert!(filter_jobs(&jobs, &criteria("", "10th", "", "")).is_empty());
    }

    #[test]
    fn test_filter_results_are_subsets() {
        let jobs = seed();
        let samples = [
            criteria("o", "", "", ""),
            criteria("", "Graduate", "", ""),
            criteria("", "", "Delhi", ""),
            criteria("", "", "", "Other"),
            criteria("sub", "Graduate", "Uttar Pradesh", "Police"),
        ];

        for sample in &samples {
            let result = filter_jobs(&jobs, sample);
            assert!(result.len() <= jobs.len());
            assert!(result.iter().all(|r| jobs.iter().any(|j| j == *r)));
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let mut job = seed().remove(0);

        job.last_date = (now - Duration::days(1)).format("%Y-%m-%d").to_string();
        assert!(is_expired(&job, now));

        job.last_date = (now + Duration::days(1)).format("%Y-%m-%d").to_string();
        assert!(!is_expired(&job, now));
    }

    #[test]
    fn test_expiry_is_strict() {
        let mut job = seed().remove(0);
        job.last_date = "2025-06-01".to_string();
        let deadline = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        assert!(!is_expired(&job, deadline));
        assert!(is_expired(&job, deadline + Duration::seconds(1)));
    }

    #[test]
    fn test_rfc3339_and_invalid_deadlines() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut job = seed().remove(0);

        job.last_date = "2025-06-01T11:59:59.000Z".to_string();
        assert!(is_expired(&job, now));

        job.last_date = "2025-06-01T13:00:00+00:00".to_string();
        assert!(!is_expired(&job, now));

        job.last_date = "soon".to_string();
        assert!(!is_expired(&job, now));
    }

    #[test]
    fn test_seeded_police_job_is_expired() {
        let jobs = seed();
        let police = jobs.iter().find(|j| j.last_date == "2024-01-01").unwrap();

        let after = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert!(is_expired(police, after));
    }

    #[test]
    fn test_dashboard_stats() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 18, 0, 0).unwrap();
        let mut jobs = seed();
        jobs.push(jobs[0].clone());

        let stats = dashboard_stats(&jobs, now);

        assert_eq!(stats.total, 5);
        // Seed records posted at the seeding instant, except the Police one.
        assert_eq!(stats.posted_today, 4);
        assert_eq!(stats.expired, 1);
        assert_eq!(
            stats.by_category,
            vec![
                CategoryCount { name: "Bank".to_string(), value: 2 },
                CategoryCount { name: "Railway".to_string(), value: 1 },
                CategoryCount { name: "Police".to_string(), value: 1 },
                CategoryCount { name: "UPSC".to_string(), value: 1 },
            ]
        );
    }

    #[test]
    fn test_latest_headlines() {
        let jobs = seed();

        let headlines = latest_headlines(&jobs, 2);
        assert_eq!(
            headlines,
            vec![
                "Probationary Officer (PO) @ State Bank of India".to_string(),
                "Assistant Loco Pilot @ Indian Railways".to_string(),
            ]
        );
        assert_eq!(latest_headlines(&jobs, 10).len(), 4);
    }
}
