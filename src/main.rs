use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = sticky::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
