use std::process::ExitCode;

use learnogl::tutorials::tutorial04::DrawHexagon;

fn main() -> ExitCode {
    learnogl::launch::<DrawHexagon>()
}
