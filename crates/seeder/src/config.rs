use models::{
    course::NewCourse,
    inscription::InscriptionStatus,
    user::{NewUser, UserRole},
};
use std::ops::RangeInclusive;

/// The MockAPI project backing the student-management demo
pub const DEFAULT_BASE_URL: &str = "https://691e4f67bb52a1db22bd8c5d.mockapi.io/";

/// Upper bound for `enrollment_window_days`, about a century
pub const MAX_ENROLLMENT_WINDOW_DAYS: u32 = 36_500;

const FIRST_NAMES: [&str; 10] = [
    "Juan", "María", "Carlos", "Ana", "Pedro", "Laura", "Diego", "Sofía", "Miguel", "Carmen",
];

const LAST_NAMES: [&str; 10] = [
    "García",
    "López",
    "Martínez",
    "Rodríguez",
    "González",
    "Fernández",
    "Sánchez",
    "Pérez",
    "Ramírez",
    "Torres",
];

/// Everything a reset run needs to know, passed explicitly into each phase
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub base_url: String,
    /// Pool of first names, sampled with replacement
    pub first_names: Vec<String>,
    /// Pool of last names, sampled with replacement
    pub last_names: Vec<String>,
    pub student_count: usize,
    pub student_ages: RangeInclusive<u8>,
    /// Fixed catalog, created in order
    pub courses: Vec<NewCourse>,
    pub inscription_count: usize,
    /// Enrollment dates fall within this many days before the run
    pub enrollment_window_days: u32,
    /// Relative weight of each inscription status
    pub status_weights: Vec<(InscriptionStatus, u32)>,
    pub admin: NewUser,
    /// Regular users, created after the admin
    pub users: Vec<NewUser>,
}

impl SeedConfig {
    /// Login pairs worth printing once the run is over: the admin and the
    /// first regular user
    pub fn credentials(&self) -> impl Iterator<Item = (&'static str, &NewUser)> {
        std::iter::once(("Admin", &self.admin)).chain(self.users.first().map(|user| ("User", user)))
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            first_names: FIRST_NAMES.iter().map(|name| name.to_string()).collect(),
            last_names: LAST_NAMES.iter().map(|name| name.to_string()).collect(),
            student_count: 10,
            student_ages: 18..=45,
            courses: vec![
                NewCourse::new("Angular Fundamentals", "ANG101", 80, 20, "Dr. Roberto Silva", 30),
                NewCourse::new("React Development", "REACT201", 60, 15, "Ing. Patricia Rojas", 25),
                NewCourse::new("Node.js Backend", "NODE301", 100, 25, "Dr. Fernando Castro", 20),
                NewCourse::new("Python Programming", "PY101", 120, 30, "Dra. Isabel Morales", 35),
                NewCourse::new("Database Design", "DB201", 70, 18, "Ing. Ricardo Vega", 28),
                NewCourse::new("DevOps Essentials", "DEVOPS301", 90, 22, "Ing. Carmen Flores", 22),
                NewCourse::new("UI/UX Design", "UX101", 50, 12, "Dis. Andrea Núñez", 30),
                NewCourse::new("Mobile Development", "MOB401", 110, 28, "Dr. Luis Mendoza", 25),
            ],
            inscription_count: 20,
            enrollment_window_days: 180,
            status_weights: vec![
                (InscriptionStatus::Active, 14),
                (InscriptionStatus::Completed, 4),
                (InscriptionStatus::Cancelled, 2),
            ],
            admin: NewUser::new("Admin", "User", "admin@test.com", "admin123", UserRole::Admin),
            users: vec![
                NewUser::new("Carlos", "Pérez", "user@test.com", "user123", UserRole::User),
                NewUser::new(
                    "María",
                    "González",
                    "maria.gonzalez@test.com",
                    "user123",
                    UserRole::User,
                ),
                NewUser::new(
                    "Pedro",
                    "Ramírez",
                    "pedro.ramirez@test.com",
                    "user123",
                    UserRole::User,
                ),
                NewUser::new("Ana", "Torres", "ana.torres@test.com", "user123", UserRole::User),
            ],
        }
    }
}
