use super::post;
use crate::{config::SeedConfig, transport::Transport};
use log::{error, info};
use models::{collection::Collection, course::Course};

/// Creates the fixed course catalog, in order
pub async fn create_courses<T>(transport: &T, config: &SeedConfig) -> Vec<Course>
where
    T: Transport + ?Sized,
{
    info!("Creating courses...");

    let mut courses = Vec::with_capacity(config.courses.len());
    for course in &config.courses {
        match post(transport, Collection::Courses, course).await {
            Ok(created) => {
                info!("Created course: {} (ID: {})", created.name, created.id);
                courses.push(created);
            }
            Err(e) => error!("Failed to create course: {}: {e}", course.name),
        }
    }

    courses
}
