use std::fs;

use clap::{App, load_yaml};
use rand::Rng;

/** generates a random G(n,p) coloring instance: each of the n(n-1)/2
possible edges is kept with probability p. The `colors=K` directive is
written first, then one `a,b` line per edge (vertex ids start at 1). */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("random_instance.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let output = main_args.value_of("output").unwrap();
    let n: usize = main_args.value_of("nb_vertices").unwrap().parse()
        .expect("unable to parse the number of vertices");
    let density: f64 = main_args.value_of("density").unwrap().parse()
        .expect("unable to parse the density");
    assert!((0. ..=1.).contains(&density), "density must be between 0 and 1");
    let nb_colors: usize = main_args.value_of("colors").unwrap().parse()
        .expect("unable to parse the color bound");

    // draw the edges
    let mut rng = rand::thread_rng();
    let mut content = format!(
        "# random instance: {} vertices, density {}\ncolors={}\n",
        n, density, nb_colors
    );
    let mut m = 0;
    for a in 1..=n {
        for b in (a+1)..=n {
            if rng.gen_bool(density) {
                content += format!("{},{}\n", a, b).as_str();
                m += 1;
            }
        }
    }
    fs::write(output, content)
        .unwrap_or_else(|_| panic!("unable to write the instance in {}", output));
    println!("wrote {} \t ({} vertices, {} edges)", output, n, m);
}
