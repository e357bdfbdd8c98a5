use safe_harbor::DocumentKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    safe_harbor::cli::run(DocumentKind::PolicyPack)
}
