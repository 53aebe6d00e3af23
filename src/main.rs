use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fittrack::config::Config;
use fittrack::handlers::{exercises, planners, users, workouts};
use fittrack::repositories::{
    ExerciseRepository, PlannerRepository, UserRepository, WorkoutRepository,
};
use fittrack::token::JwtKeys;
use fittrack::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database: {}", config.database_url);
    let pool = db::create_pool(&config.database_url)?;
    migrations::run_migrations(&pool)?;

    let keys = JwtKeys::new(&config.jwt);

    let user_repo = UserRepository::new(pool.clone());
    let workout_repo = WorkoutRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let planner_repo = PlannerRepository::new(pool.clone());

    tracing::info!(users = user_repo.count().await?, "Database ready");

    let users_state = users::UsersState { user_repo, keys };
    let workouts_state = workouts::WorkoutsState {
        workout_repo,
        exercise_repo: exercise_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState { exercise_repo };
    let planners_state = planners::PlannersState { planner_repo };

    let app = routes::create_router(users_state, workouts_state, exercises_state, planners_state);

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
