use std::process::ExitCode;

fn main() -> ExitCode {
    match femine::export::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Export failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
