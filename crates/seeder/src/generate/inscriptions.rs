use super::post;
use crate::{config::SeedConfig, error::SeedError, transport::Transport};
use chrono::{DateTime, TimeDelta, Utc};
use log::{error, info, warn};
use models::{
    collection::Collection,
    course::Course,
    inscription::{Inscription, InscriptionStatus, NewInscription},
    student::Student,
};
use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
    seq::IndexedRandom,
};

/// Course names are cut to this many characters in progress output
const COURSE_NAME_DISPLAY_LEN: usize = 30;

/// Discrete distribution over inscription statuses, proportional to the
/// configured weights
#[derive(Debug, Clone)]
pub struct StatusDistribution {
    statuses: Vec<InscriptionStatus>,
    index: WeightedIndex<u32>,
}

impl StatusDistribution {
    /// Fails if there are no weights, or they are all zero
    pub fn new(weights: &[(InscriptionStatus, u32)]) -> Result<Self, SeedError> {
        let index = WeightedIndex::new(weights.iter().map(|(_, weight)| *weight))?;
        let statuses = weights.iter().map(|(status, _)| *status).collect();

        Ok(Self { statuses, index })
    }
}

impl Distribution<InscriptionStatus> for StatusDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> InscriptionStatus {
        self.statuses[self.index.sample(rng)]
    }
}

/// A drawn enrollment, along with the records it links
#[derive(Debug, Clone)]
pub struct Enrollment<'a> {
    pub student: &'a Student,
    pub course: &'a Course,
    pub inscription: NewInscription,
}

/// Draws one enrollment.
///
/// Student and course are sampled uniformly with replacement, the enrollment
/// date lies a whole number of days, uniform in `0..=window_days`, before
/// `now`, and the status comes from `statuses`. Returns `None` if either pool
/// is empty or the date would fall outside the representable range.
pub fn build_inscription<'a, R: Rng>(
    students: &'a [Student],
    courses: &'a [Course],
    statuses: &StatusDistribution,
    window_days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<Enrollment<'a>> {
    let student = students.choose(rng)?;
    let course = courses.choose(rng)?;
    let days_ago = rng.random_range(0..=window_days);
    let enrollment_date = now.checked_sub_signed(TimeDelta::try_days(days_ago.into())?)?;

    Some(Enrollment {
        student,
        course,
        inscription: NewInscription {
            student_id: student.id.clone(),
            course_id: course.id.clone(),
            enrollment_date,
            status: statuses.sample(rng),
        },
    })
}

/// Creates `config.inscription_count` random enrollments between the given
/// students and courses.
///
/// Nothing is attempted if either set is empty. Rejected inscriptions are
/// logged and skipped.
pub async fn create_inscriptions<T, R>(
    transport: &T,
    config: &SeedConfig,
    statuses: &StatusDistribution,
    students: &[Student],
    courses: &[Course],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Inscription>
where
    T: Transport + ?Sized,
    R: Rng,
{
    info!("Creating inscriptions...");

    if students.is_empty() || courses.is_empty() {
        warn!("No students or courses available for inscriptions");
        return Vec::new();
    }

    let mut inscriptions = Vec::with_capacity(config.inscription_count);
    for _ in 0..config.inscription_count {
        let Some(enrollment) = build_inscription(
            students,
            courses,
            statuses,
            config.enrollment_window_days,
            now,
            rng,
        ) else {
            break;
        };

        match post(transport, Collection::Inscriptions, &enrollment.inscription).await {
            Ok(created) => {
                info!(
                    "Created inscription: {} → {} (ID: {})",
                    enrollment.student.first_name,
                    enrollment.course.short_name(COURSE_NAME_DISPLAY_LEN),
                    created.id
                );
                inscriptions.push(created);
            }
            Err(e) => error!("Failed to create inscription: {e}"),
        }
    }

    inscriptions
}
