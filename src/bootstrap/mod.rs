pub mod config;
pub mod footer_context;

/// Tracing subscriber setup shared by demos and integration harnesses.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "version_footer=debug".into()),
        )
        .init();
}
