use std::fs;
use std::process::exit;

use matecheck::coord::{Coord, BOARD_SIZE};
use matecheck::game::Game;
use matecheck::scenarios::{self, ScenarioSpec};

fn usage() -> String {
    format!(
        "Usage: evaluate [scenario] [--file <path>] [--threats] [--json]\n\n\
         Evaluates a fixed position and reports whether the defending king is\n\
         checkmated. Defaults to the \"reference\" scenario.\n\n\
         Available scenarios:\n  - {}",
        scenarios::available_names().join("\n  - ")
    )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut scenario_name: Option<String> = None;
    let mut file: Option<String> = None;
    let mut show_threats = false;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--file requires a path argument");
                    exit(2);
                };
                file = Some(path.clone());
                i += 2;
            }
            "--threats" => {
                show_threats = true;
                i += 1;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            "--help" | "-h" => {
                println!("{}", usage());
                return;
            }
            x if x.starts_with("--") => {
                eprintln!("Unknown option: {x}\n\n{}", usage());
                exit(2);
            }
            x => {
                if scenario_name.is_some() {
                    eprintln!("More than one scenario given\n\n{}", usage());
                    exit(2);
                }
                scenario_name = Some(x.to_string());
                i += 1;
            }
        }
    }

    let spec = load_spec(scenario_name.as_deref(), file.as_deref());

    let game = match spec.build() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Failed to set up position: {e}");
            exit(1);
        }
    };

    let (in_check, has_escape, checkmate) =
        match (game.is_check(), game.has_escape(), game.is_checkmate()) {
            (Ok(c), Ok(e), Ok(m)) => (c, e, m),
            _ => {
                eprintln!("Position has no defending king");
                exit(1);
            }
        };

    if json {
        let out = serde_json::json!({
            "scenario": spec.name,
            "in_check": in_check,
            "has_escape": has_escape,
            "checkmate": checkmate,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
        return;
    }

    print!("{}", game.board());

    if show_threats {
        println!();
        print_threats(&game);
    }

    if checkmate {
        println!("Checkmate!");
    } else {
        println!("Not checkmate.");
    }
}

fn load_spec(scenario_name: Option<&str>, file: Option<&str>) -> ScenarioSpec {
    if let Some(path) = file {
        if scenario_name.is_some() {
            eprintln!("Give either a scenario name or --file, not both\n\n{}", usage());
            exit(2);
        }
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Cannot read {path}: {e}");
                exit(1);
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(spec) => spec,
            Err(e) => {
                eprintln!("Cannot parse {path}: {e}");
                exit(1);
            }
        }
    } else {
        let name = scenario_name.unwrap_or("reference");
        match scenarios::by_name(name) {
            Some(spec) => spec,
            None => {
                eprintln!("Unknown scenario: {name}\n\n{}", usage());
                exit(2);
            }
        }
    }
}

/// Second grid: `*` marks threatened vacant squares, glyphs mark pieces.
fn print_threats(game: &Game) {
    let threatened = game.threat_map();
    for y in 0..BOARD_SIZE {
        let mut row = String::new();
        for x in 0..BOARD_SIZE {
            if x > 0 {
                row.push(' ');
            }
            let c = Coord::new(x, y);
            if let Some(piece) = game.board().occupant(c) {
                row.push(piece.glyph());
            } else if threatened.contains(&c) {
                row.push('*');
            } else {
                row.push('.');
            }
        }
        println!("{row}");
    }
    println!();
}
