use std::process::ExitCode;

use learnogl::tutorials::tutorial03::DrawRectangle;

fn main() -> ExitCode {
    learnogl::launch::<DrawRectangle>()
}
