use bizcase_modeling::BusinessCaseEngine;

fn main() -> anyhow::Result<()> {
    bizcase_observability::init();

    let config = bizcase_cli::config::from_env();
    tracing::debug!(profile = %config.fixed_cost_profile, "configuration loaded");

    let path = std::env::args().nth(1);
    let engine = BusinessCaseEngine::new(config);

    bizcase_cli::run(&engine, path.as_deref(), std::io::stdout().lock())
}
