use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use equi::api::{
    antiprism, cube, dodecahedron, icosahedron, octahedron, prism, pyramid, tetrahedron, GraphData,
    InputGraph, RealizationEngine, RunSummary, Symmetries,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "equi-cli")]
#[command(about = "Symmetry analysis and equilateral realization of polyhedral graphs")]
struct Cmd {
    /// Log every solver step
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Debug)]
struct Source {
    /// JSON file `{ "neighbours": [[..]], "coordinates": [[x, y, z]]? }`
    #[arg(long, conflicts_with = "builtin", required_unless_present = "builtin")]
    input: Option<PathBuf>,
    /// cube | tetrahedron | octahedron | icosahedron | dodecahedron | prism:K |
    /// antiprism:K | pyramid:K
    #[arg(long)]
    builtin: Option<String>,
}

#[derive(Subcommand)]
enum Action {
    /// Print the automorphism group, its subgroups and their point groups
    Symmetries {
        #[command(flatten)]
        source: Source,
    },
    /// Run the solver and print coordinates
    Solve {
        #[command(flatten)]
        source: Source,
        /// Point-group caption to enforce, e.g. `D5h`
        #[arg(long)]
        group: Option<String>,
        /// Index into the subgroup list printed by `symmetries`
        #[arg(long, default_value_t = 0)]
        subgroup: usize,
        #[arg(long, default_value_t = 100, conflicts_with = "millis")]
        steps: usize,
        /// Wall-clock budget; replaces `--steps`
        #[arg(long)]
        millis: Option<u64>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Jitter the start by this amount before solving
        #[arg(long)]
        perturb: Option<f64>,
        /// Write the result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print counts and the accuracy of the starting coordinates
    Report {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Serialize)]
struct SubgroupReport {
    index: usize,
    group: String,
    order: usize,
    point_groups: Vec<String>,
}

#[derive(Serialize)]
struct SymmetryReport {
    group: String,
    order: usize,
    signature: Vec<(usize, usize)>,
    subgroups: Vec<SubgroupReport>,
}

#[derive(Serialize)]
struct SolveReport {
    point_group: String,
    steps: usize,
    accuracy: f64,
    cancelled: bool,
    coordinates: Vec<[f64; 3]>,
}

#[derive(Serialize)]
struct GraphReport {
    vertices: usize,
    edges: usize,
    faces: usize,
    euler_characteristic: i64,
    equations: usize,
    variables: usize,
    face_sizes: Vec<usize>,
    initial_accuracy: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Symmetries { source } => symmetries(&source),
        Action::Solve {
            source,
            group,
            subgroup,
            steps,
            millis,
            seed,
            perturb,
            out,
        } => solve(
            &source,
            SolveOpts {
                group,
                subgroup,
                steps,
                millis,
                seed,
                perturb,
            },
            out.as_deref(),
        ),
        Action::Report { source, seed } => report(&source, seed),
    }
}

fn load(source: &Source) -> Result<InputGraph> {
    match (&source.input, &source.builtin) {
        (Some(path), _) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let data: GraphData = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(data.build()?)
        }
        (None, Some(spec)) => builtin(spec),
        (None, None) => bail!("one of --input or --builtin is required"),
    }
}

/// Parse `name` or `name:K`.
fn builtin(spec: &str) -> Result<InputGraph> {
    let (name, k) = match spec.split_once(':') {
        Some((name, k)) => {
            let k: usize = k
                .parse()
                .with_context(|| format!("bad size in builtin {spec:?}"))?;
            if k < 3 {
                bail!("builtin {spec:?}: size must be at least 3");
            }
            (name, Some(k))
        }
        None => (spec, None),
    };
    let graph = match (name, k) {
        ("cube", None) => return Ok(InputGraph::Embedded(cube()?)),
        ("octahedron", None) => return Ok(InputGraph::Embedded(octahedron()?)),
        ("icosahedron", None) => return Ok(InputGraph::Embedded(icosahedron()?)),
        ("dodecahedron", None) => return Ok(InputGraph::Embedded(dodecahedron()?)),
        ("tetrahedron", None) => tetrahedron()?,
        ("prism", Some(k)) => prism(k)?,
        ("antiprism", Some(k)) => antiprism(k)?,
        ("pyramid", Some(k)) => pyramid(k)?,
        _ => bail!("unknown builtin {spec:?}"),
    };
    Ok(InputGraph::Plain(graph))
}

fn engine_for(input: &InputGraph, seed: u64) -> RealizationEngine {
    let mut rng = StdRng::seed_from_u64(seed);
    match input {
        InputGraph::Plain(g) => RealizationEngine::new(g, &mut rng),
        InputGraph::Embedded(e) => RealizationEngine::from_embedded(e, &mut rng),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn symmetries(source: &Source) -> Result<()> {
    let input = load(source)?;
    let sym = Symmetries::compute(input.graph());
    let subgroups = sym
        .group()
        .map(|g| {
            g.subgroups()
                .into_iter()
                .enumerate()
                .map(|(index, s)| SubgroupReport {
                    index,
                    group: s.kind().to_string(),
                    order: s.order(),
                    point_groups: s.captions(),
                })
                .collect()
        })
        .unwrap_or_default();
    print_json(&SymmetryReport {
        group: sym.name(),
        order: sym.order(),
        signature: sym.signature().iter().collect(),
        subgroups,
    })
}

struct SolveOpts {
    group: Option<String>,
    subgroup: usize,
    steps: usize,
    millis: Option<u64>,
    seed: u64,
    perturb: Option<f64>,
}

fn solve(source: &Source, opts: SolveOpts, out: Option<&Path>) -> Result<()> {
    let input = load(source)?;
    let mut engine = engine_for(&input, opts.seed);
    if let Some(caption) = &opts.group {
        let sym = Symmetries::compute(input.graph());
        let Some(group) = sym.group() else {
            bail!("automorphism group is unknown; cannot enforce {caption}");
        };
        let subgroups = group.subgroups();
        let sub = subgroups.get(opts.subgroup).with_context(|| {
            format!(
                "subgroup index {} out of range ({} available)",
                opts.subgroup,
                subgroups.len()
            )
        })?;
        engine.set_group(sub.realize(caption)?)?;
    }
    if let Some(step) = opts.perturb {
        let mut rng = StdRng::seed_from_u64(opts.seed.wrapping_add(1));
        engine.random_perturbation(step, &mut rng);
    }
    let listener = |step: usize, accuracy: f64| tracing::debug!(step, accuracy, "step");
    let summary: RunSummary = match opts.millis {
        Some(ms) => engine.timed_step(Duration::from_millis(ms), listener),
        None => engine.multiple_steps(opts.steps, listener),
    };
    let result = SolveReport {
        point_group: engine.group().caption().to_string(),
        steps: summary.steps,
        accuracy: summary.accuracy,
        cancelled: summary.cancelled,
        coordinates: engine.coordinates(),
    };
    let Some(out) = out else {
        return print_json(&result);
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "input": source.input,
        "builtin": source.builtin,
        "group": opts.group,
        "subgroup": opts.subgroup,
        "steps": opts.steps,
        "millis": opts.millis,
        "seed": opts.seed,
        "perturb": opts.perturb,
    });
    let sidecar = provenance::write_sidecar(out, provenance::Payload::new(params))?;
    tracing::info!(out = %out.display(), provenance = %sidecar.display(), "wrote result");
    Ok(())
}

fn report(source: &Source, seed: u64) -> Result<()> {
    let input = load(source)?;
    let graph = input.graph();
    let engine = engine_for(&input, seed);
    let system = engine.solver().system();
    let mut face_sizes: Vec<usize> = graph.faces().iter().map(Vec::len).collect();
    face_sizes.sort_unstable();
    print_json(&GraphReport {
        vertices: graph.order(),
        edges: graph.size(),
        faces: graph.face_count(),
        euler_characteristic: graph.euler_characteristic(),
        equations: system.equation_count(),
        variables: system.variable_count(),
        face_sizes,
        initial_accuracy: engine.accuracy(),
    })
}
