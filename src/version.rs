/// Set by `build.rs` from `git describe` or the `GIT_VERSION` env var.
pub const GIT_VERSION: &str = env!("GIT_VERSION");
