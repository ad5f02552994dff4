use std::process::ExitCode;

use learnogl::tutorials::tutorial06::DrawPyramid;

fn main() -> ExitCode {
    learnogl::launch::<DrawPyramid>()
}
