use std::process::ExitCode;

use learnogl::tutorials::tutorial07::BlendTextures;

fn main() -> ExitCode {
    learnogl::launch::<BlendTextures>()
}
