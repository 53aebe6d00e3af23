pub mod exercise_entry;
pub mod from_row;
pub mod planner;
pub mod user;
pub mod workout;

pub use exercise_entry::{ExerciseEntry, ExerciseMessage, NewExerciseEntry};
pub use from_row::FromSqliteRow;
pub use planner::{CreatePlanner, Planner, UpdatePlanner};
pub use user::{LoginCredentials, PublicUser, RegisterUser, TokenResponse, UpdateUser, User};
pub use workout::{CreateWorkout, UpdateWorkout, Workout, DEFAULT_STATUS};
