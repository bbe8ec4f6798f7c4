mod cli;
mod dashboard;
mod html;

fn main() {
    if let Err(err) = dashboard::telemetry::init_tracing() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
    if let Err(err) = cli::run_from_env() {
        tracing::error!("startup failed: {err:#}");
        std::process::exit(1);
    }
}
