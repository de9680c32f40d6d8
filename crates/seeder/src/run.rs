use crate::{
    config::{MAX_ENROLLMENT_WINDOW_DAYS, SeedConfig},
    error::SeedError,
    generate::{
        courses::create_courses,
        inscriptions::{StatusDistribution, create_inscriptions},
        students::create_students,
        users::create_users,
    },
    purge::purge_all,
    report::{CollectionCounts, Summary, banner},
    transport::Transport,
};
use chrono::{DateTime, Utc};
use models::collection::Collection;
use rand::Rng;

/// Wipes every collection and fills it again with fresh sample data.
///
/// Deletion and generation never abort on a failed request; failures are
/// logged and reflected in the counts of the returned [`Summary`].
///
/// # Arguments
/// * `transport` - Where records are listed, deleted and created
/// * `config` - Sample data and counts
/// * `rng` - Source of randomness for students and inscriptions
/// * `now` - Reference time for enrollment dates
///
/// # Returns
/// The summary, or [`SeedError::InvalidWeights`] / [`SeedError::InvalidWindow`]
/// if the status weights or the enrollment window are unusable. Both checks
/// happen before any request is sent.
pub async fn reset<T, R>(
    transport: &T,
    config: &SeedConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Summary, SeedError>
where
    T: Transport + ?Sized,
    R: Rng,
{
    let statuses = StatusDistribution::new(&config.status_weights)?;
    if config.enrollment_window_days > MAX_ENROLLMENT_WINDOW_DAYS {
        return Err(SeedError::InvalidWindow(config.enrollment_window_days));
    }

    println!("\n{}", banner("PHASE 1: Deleting existing data"));
    let deleted = purge_all(transport).await;

    println!("\n{}", banner("PHASE 2: Creating new data"));
    let students = create_students(transport, config, rng).await;
    let courses = create_courses(transport, config).await;
    let inscriptions =
        create_inscriptions(transport, config, &statuses, &students, &courses, now, rng).await;
    let users = create_users(transport, config).await;

    let created = CollectionCounts::from_iter([
        (Collection::Students, students.len()),
        (Collection::Courses, courses.len()),
        (Collection::Inscriptions, inscriptions.len()),
        (Collection::Users, users.len()),
    ]);

    Ok(Summary::new(deleted, created, config))
}
