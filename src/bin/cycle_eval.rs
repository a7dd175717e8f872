use std::path::Path;
use std::process::ExitCode;

use cycle_finder::eval::{evaluate, EvalInput};
use cycle_finder::CycleError;

const USAGE_OR_INPUT: u8 = 2;
const RUNTIME: u8 = 1;

fn load(path: &Path) -> Result<EvalInput, (u8, String)> {
    let bytes = std::fs::read(path)
        .map_err(|e| (RUNTIME, format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| (USAGE_OR_INPUT, format!("Invalid JSON in {}: {e}", path.display())))
}

fn run(args: &[String]) -> Result<String, (u8, String)> {
    let [_, path] = args else {
        return Err((USAGE_OR_INPUT, "Usage: cycle_eval <input.json>".to_string()));
    };

    let input = load(Path::new(path))?;
    let report = evaluate(&input).map_err(|e| match e {
        CycleError::InvalidArgument { .. } => (USAGE_OR_INPUT, format!("Invalid input: {e}")),
        _ => (RUNTIME, format!("Detection failed: {e}")),
    })?;

    let out = serde_json::json!({
        "input": input,
        "report": report,
    });
    serde_json::to_string_pretty(&out).map_err(|e| (RUNTIME, format!("Encoding failed: {e}")))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err((code, message)) => {
            eprintln!("{message}");
            ExitCode::from(code)
        }
    }
}
