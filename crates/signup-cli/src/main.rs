use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}"); // pretty anyhow chain
            ExitCode::FAILURE
        }
    }
}
