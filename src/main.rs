use std::process::ExitCode;

fn main() -> ExitCode {
    match zycare_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("zycare: {e}");
            ExitCode::FAILURE
        }
    }
}
