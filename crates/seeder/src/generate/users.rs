use super::post;
use crate::{config::SeedConfig, transport::Transport};
use log::{error, info};
use models::{collection::Collection, user::User};

/// Creates the admin, then each regular user, in order
pub async fn create_users<T>(transport: &T, config: &SeedConfig) -> Vec<User>
where
    T: Transport + ?Sized,
{
    info!("Creating users...");

    let mut users = Vec::with_capacity(config.users.len() + 1);
    for user in std::iter::once(&config.admin).chain(&config.users) {
        let kind = if user.is_admin() { "admin user" } else { "user" };

        match post(transport, Collection::Users, user).await {
            Ok(created) => {
                info!("Created {kind}: {} (ID: {})", created.email, created.id);
                users.push(created);
            }
            Err(e) => error!("Failed to create {kind}: {}: {e}", user.email),
        }
    }

    users
}
