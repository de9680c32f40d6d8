pub mod collection;
pub mod course;
pub mod inscription;
pub mod record;
pub mod student;
pub mod user;
