pub mod exercises;
pub mod health;
pub mod planners;
pub mod users;
pub mod workouts;
