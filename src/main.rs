use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use cutvertex::{
    articulation::{brute_force, brute_force_parallel, detect, detect_observed, ArticulationPoints},
    components::count_connected_components,
    graph::Graph,
    loader::{load, Format, LoadOptions},
    snapshot::SnapshotWriter,
    traversal::{Order, Traversal},
    types::{VId, MAX_VID},
};
use derive_more::Display;
use itertools::Itertools;
use std::error::Error;
use std::time::Instant;

#[derive(Debug, Display, PartialEq)]
enum Err {
    #[display(fmt = "invalid snapshot interval: {}", _0)]
    InvalidInterval(String),
    #[display(fmt = "invalid maximum vertex id: {}", _0)]
    InvalidMaxId(String),
    #[display(fmt = "detector found [{}] but brute force found [{}]", _0, _1)]
    Mismatch(String, String),
}

impl std::error::Error for Err {}

fn graph_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("GRAPH")
            .required(true)
            .help("Graph corpus to load"),
        Arg::with_name("format")
            .long("format")
            .takes_value(true)
            .possible_values(&["text", "sqlite"])
            .default_value("text")
            .help("Format of GRAPH"),
        Arg::with_name("directed")
            .long("directed")
            .help("Treat edges as directed"),
        Arg::with_name("lenient")
            .long("lenient")
            .help("Skip malformed records instead of aborting"),
        Arg::with_name("max-id")
            .long("max-id")
            .takes_value(true)
            .help("Largest accepted 1-indexed vertex id"),
    ]
}

fn load_graph(matches: &ArgMatches) -> Result<Graph, Box<dyn Error>> {
    let format: Format = matches.value_of("format").unwrap_or("text").parse()?;
    let max_id = match matches.value_of("max-id") {
        Some(id) => id
            .parse::<VId>()
            .ok()
            .and_then(|id| id.checked_sub(1))
            .ok_or_else(|| Err::InvalidMaxId(id.to_string()))?,
        None => MAX_VID,
    };
    let options = LoadOptions {
        undirected: !matches.is_present("directed"),
        lenient: matches.is_present("lenient"),
        max_id,
    };
    Ok(load(matches.value_of("GRAPH").unwrap(), format, &options)?)
}

fn format_points(points: &ArticulationPoints) -> String {
    points.iter().join(" ")
}

fn handle_stats(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    println!("vertices: {}", graph.vertex_count());
    println!("edges: {}", graph.edge_count());
    println!("components: {}", count_connected_components(&graph));
    Ok(())
}

fn handle_detect(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    let time_now = Instant::now();
    let points = match matches.value_of("snapshot-dir") {
        Some(dir) => {
            let every = matches.value_of("snapshot-every").unwrap_or("1000");
            let every: usize = every
                .parse()
                .map_err(|_| Err::InvalidInterval(every.to_string()))?;
            let mut writer = SnapshotWriter::new(dir, every)?;
            let points = detect_observed(&graph, &mut writer);
            writer.finish()?;
            points
        }
        None => detect(&graph),
    };
    let elapsed = time_now.elapsed().as_millis();
    println!("articulation points: {}", points.len());
    println!("{}", format_points(&points));
    println!("time: {} ms", elapsed);
    Ok(())
}

fn handle_validate(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut graph = load_graph(matches)?;
    let time_now = Instant::now();
    let detected = detect(&graph);
    println!("detector: {} ms", time_now.elapsed().as_millis());
    let time_now = Instant::now();
    let expected = if matches.is_present("parallel") {
        brute_force_parallel(&graph)?
    } else {
        brute_force(&mut graph)?
    };
    println!("brute force: {} ms", time_now.elapsed().as_millis());
    if detected != expected {
        return Err(Err::Mismatch(format_points(&detected), format_points(&expected)).into());
    }
    println!("both found {} articulation points", detected.len());
    Ok(())
}

fn handle_traverse(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    let order = if matches.is_present("bfs") {
        Order::Breadth
    } else {
        Order::Depth
    };
    for vertex in Traversal::new(&graph, order) {
        println!("{}", vertex.label());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("cutvertex")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("stats")
                .about("Prints vertex, edge and component counts")
                .args(&graph_args()),
        )
        .subcommand(
            SubCommand::with_name("detect")
                .about("Finds the articulation points")
                .args(&graph_args())
                .arg(
                    Arg::with_name("snapshot-dir")
                        .long("snapshot-dir")
                        .takes_value(true)
                        .help("Writes search snapshots into this directory"),
                )
                .arg(
                    Arg::with_name("snapshot-every")
                        .long("snapshot-every")
                        .takes_value(true)
                        .requires("snapshot-dir")
                        .help("Number of visited edges between snapshots [default: 1000]"),
                ),
        )
        .subcommand(
            SubCommand::with_name("validate")
                .about("Checks the detector against the brute-force oracle")
                .args(&graph_args())
                .arg(
                    Arg::with_name("parallel")
                        .long("parallel")
                        .help("Runs the oracle on all cores"),
                ),
        )
        .subcommand(
            SubCommand::with_name("traverse")
                .about("Prints the vertex labels in traversal order")
                .args(&graph_args())
                .arg(
                    Arg::with_name("bfs")
                        .long("bfs")
                        .help("Breadth-first instead of depth-first"),
                ),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("stats") {
        handle_stats(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("detect") {
        handle_detect(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("validate") {
        handle_validate(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("traverse") {
        handle_traverse(matches)?;
    }
    Ok(())
}
