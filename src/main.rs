use std::time::Instant;

use clap::{App, load_yaml};

use csp_color::color::{checker, CheckerResult};
use csp_color::search::backtracking::solve;
use csp_color::util::{read_params, export_results, coloring_to_string, SearchStats};

/** solves a graph coloring instance: AC-3 propagation + backtracking
search guided by the MRV and LCV heuristics.

Prints the coloring sorted by vertex id, or a "no solution" message when
the instance is proven infeasible (which is a normal outcome, not an
error). */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, inst_file, sol_file, perf_file) = match read_params(&main_args) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    println!("=========================================================");
    println!("instance: {} \t ({} colors)", inst_filename, inst_file.nb_colors);
    inst_file.instance.display_statistics();
    println!("=========================================================");

    // solve it
    let t_start = Instant::now();
    let solution = solve(&inst_file.instance, inst_file.nb_colors);
    let duration = t_start.elapsed().as_secs_f32();
    match &solution {
        Some(coloring) => {
            match checker(&inst_file.instance, inst_file.nb_colors, coloring) {
                CheckerResult::Ok(nb_used) => {
                    print!("{}", coloring_to_string(coloring));
                    println!("{} colors used", nb_used);
                }
                res => panic!("invalid solution (reason: {:?})", res),
            }
        }
        None => println!("No solution found."),
    }
    println!("search took {:.3} seconds", duration);
    let stats = SearchStats {
        inst_name: inst_filename,
        nb_colors: inst_file.nb_colors,
        feasible: solution.is_some(),
        time_searched: duration,
    };

    // export results
    export_results(solution.as_ref(), &stats, perf_file, sol_file);
}
