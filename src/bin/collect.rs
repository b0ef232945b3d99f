use std::process::ExitCode;

fn main() -> ExitCode {
    match femine::scrape::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Collection failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
