use std::process::ExitCode;

use learnogl::tutorials::tutorial05::DrawCube;

fn main() -> ExitCode {
    learnogl::launch::<DrawCube>()
}
