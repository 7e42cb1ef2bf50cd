use clap::ArgMatches;
use serde::Serialize;

use crate::color::Coloring;
use crate::error::InstanceError;
use crate::parser::{self, InstanceFile};

/** statistics of a solver run (exported as JSON with `--perf`) */
#[derive(Debug, Serialize)]
pub struct SearchStats {
    /// instance filename
    pub inst_name: String,
    /// color bound of the run
    pub nb_colors: usize,
    /// whether a proper coloring was found
    pub feasible: bool,
    /// wall-clock search time (seconds)
    pub time_searched: f32,
}

/** reads command line input and returns the instance filename, the parsed
instance, and the optional solution / perf filenames */
pub fn read_params(main_args: &ArgMatches)
-> Result<(String, InstanceFile, Option<String>, Option<String>), InstanceError> {
    let inst_filename = main_args.value_of("instance").unwrap();
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    // read instance file
    let inst_file = parser::from_file(inst_filename)?;
    Ok((inst_filename.to_string(), inst_file, sol_file, perf_file))
}

/** renders a coloring, one `Vertex {v}: Color {c}` line per vertex,
sorted by vertex id */
pub fn coloring_to_string(coloring: &Coloring) -> String {
    let mut res = String::default();
    for (v, c) in coloring {
        res += format!("Vertex {}: Color {}\n", v, c).as_str();
    }
    res
}

/// exports search results to files
pub fn export_results(
    solution: Option<&Coloring>,
    stats: &SearchStats,
    perf_file: Option<String>,
    sol_file: Option<String>,
) {
    // export statistics
    match perf_file {
        None => {},
        Some(filename) => {
            let mut file = match std::fs::File::create(filename.as_str()) {
                Err(why) => panic!("couldn't create {}: {}", filename, why),
                Ok(file) => file
            };
            if let Err(why) = std::io::Write::write(
                &mut file, serde_json::to_string(stats).unwrap().as_bytes()
            ) { panic!("couldn't write: {}", why) };
        }
    }
    // export solution
    match sol_file {
        None => {},
        Some(filename) => {
            if let Some(coloring) = solution {
                std::fs::write(filename.as_str(), coloring_to_string(coloring))
                    .unwrap_or_else(|_|
                        panic!("export_results: unable to write the solution in {}", filename)
                    );
            }
        }
    }
}
