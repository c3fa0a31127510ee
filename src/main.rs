use clap::Parser;

mod output;
mod tty;

use glscaffold::{generate_project, paths, CliInputs, GenerateOutput};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "glscaffold")]
#[command(version = VERSION)]
#[command(about = "Create a C++ OpenGL project skeleton (GLFW, GLAD, GLM, Dear ImGui)")]
struct Cli {
    /// Project display name (prompts if omitted)
    name: Option<String>,

    /// Base directory where the project folder should be created
    #[arg(short = 'l', long = "location", value_name = "PATH")]
    location: Option<String>,

    /// Overwrite existing files and reuse an existing project directory
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Print a JSON response envelope instead of the text report
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> glscaffold::Result<GenerateOutput> {
    let inputs = CliInputs {
        name: cli.name,
        location: cli.location,
        force: cli.force,
    };

    let config_path = paths::config_json();
    generate_project(inputs, &mut tty::TerminalInput, config_path.as_deref())
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    let result = run(cli);
    let exit_code = match &result {
        Ok(_) => 0,
        Err(err) => output::exit_code_for_error(err.code),
    };

    let printed = if json {
        output::print_json_result(&result)
    } else {
        match &result {
            Ok(data) => output::print_report(data),
            Err(err) => {
                output::print_error(err);
                Ok(())
            }
        }
    };

    if let Err(err) = printed {
        output::print_error(&err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
