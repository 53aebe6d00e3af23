pub mod exercise_repo;
pub mod planner_repo;
pub mod user_repo;
pub mod workout_repo;

pub use exercise_repo::ExerciseRepository;
pub use planner_repo::PlannerRepository;
pub use user_repo::UserRepository;
pub use workout_repo::WorkoutRepository;
