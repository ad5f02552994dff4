use std::process::ExitCode;

use learnogl::tutorials::tutorial02::DrawTriangle;

fn main() -> ExitCode {
    learnogl::launch::<DrawTriangle>()
}
