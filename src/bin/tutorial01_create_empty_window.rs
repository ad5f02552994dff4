use std::process::ExitCode;

use learnogl::tutorials::tutorial01::EmptyWindow;

fn main() -> ExitCode {
    learnogl::launch::<EmptyWindow>()
}
