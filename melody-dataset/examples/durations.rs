//! This example prints the total duration of every melody in a dataset as JSON.

use serde::Serialize;
use std::process;

use melody_dataset::try_load_melodies;

#[derive(Serialize)]
struct MelodyDuration {
    notes: usize,
    duration: f64,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <melodies.txt>", args[0]);
        return;
    }

    let melodies = match try_load_melodies(&args[1]) {
        Ok(melodies) => melodies,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let mut durations = Vec::new();
    for (i, melody) in melodies.iter().enumerate() {
        match melody.parse_notes() {
            Ok(notes) => durations.push(MelodyDuration {
                notes: notes.len(),
                duration: notes.iter().map(|note| note.duration).sum(),
            }),
            Err(err) => {
                eprintln!("melody {}: {}", i + 1, err);
                process::exit(1);
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&durations).unwrap());
}
