use super::post;
use crate::{config::SeedConfig, transport::Transport};
use log::{error, info, warn};
use models::{
    collection::Collection,
    student::{NewStudent, Student},
};
use rand::{Rng, seq::IndexedRandom};

/// Draws one synthetic student.
///
/// Names are sampled uniformly, with replacement, from the configured pools
/// and the age uniformly from the configured range. Returns `None` when a
/// pool or the age range is empty.
pub fn build_student<R: Rng>(config: &SeedConfig, rng: &mut R) -> Option<NewStudent> {
    let first_name = config.first_names.choose(rng)?;
    let last_name = config.last_names.choose(rng)?;
    if config.student_ages.is_empty() {
        return None;
    }
    let age = rng.random_range(config.student_ages.clone());

    Some(NewStudent::new(first_name, last_name, age))
}

/// Creates `config.student_count` random students, one request each.
///
/// A rejected student is logged and skipped; generation carries on with the
/// next one.
pub async fn create_students<T, R>(transport: &T, config: &SeedConfig, rng: &mut R) -> Vec<Student>
where
    T: Transport + ?Sized,
    R: Rng,
{
    info!("Creating students...");

    let mut students = Vec::with_capacity(config.student_count);
    for _ in 0..config.student_count {
        let Some(student) = build_student(config, rng) else {
            warn!("Name pools or age range are empty, no students to create");
            break;
        };

        match post(transport, Collection::Students, &student).await {
            Ok(created) => {
                info!("Created student: {} (ID: {})", created.full_name(), created.id);
                students.push(created);
            }
            Err(e) => error!("Failed to create student: {}: {e}", student.full_name()),
        }
    }

    students
}
