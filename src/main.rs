use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bintree_layout::tree::{complete_tree_height, complete_tree_leaf_count};
use bintree_layout::{BinaryTree, DrawingSink, LayoutConfig, LayoutEngine, SvgSink};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bintree", about = "Build, check and draw complete binary trees")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Exercise every tree operation on complete trees of 0..=MAX nodes.
    Check {
        /// Largest tree size to check.
        #[arg(long, default_value_t = 31)]
        max: usize,
    },
    /// Print counts and traversals of the complete tree holding 1..=N.
    Show {
        /// Number of nodes.
        nodes: usize,
    },
    /// Lay out the complete tree holding 1..=N and write it as SVG.
    Render {
        /// Number of nodes.
        nodes: usize,
        /// Output SVG file.
        #[arg(short, long, default_value = "tree.svg")]
        output: PathBuf,
        #[command(flatten)]
        geometry: GeometryArgs,
    },
}

#[derive(Args, Debug)]
struct GeometryArgs {
    /// Canvas width in points.
    #[arg(long, default_value_t = bintree_layout::layout::LETTER_WIDTH)]
    width: f64,
    /// Canvas height in points.
    #[arg(long, default_value_t = bintree_layout::layout::LETTER_HEIGHT)]
    height: f64,
    /// Label font size.
    #[arg(long)]
    font_scale: Option<f64>,
    /// Vertical distance between levels.
    #[arg(long)]
    level_separation: Option<f64>,
    /// Horizontal distance between adjacent leaves.
    #[arg(long)]
    node_separation: Option<f64>,
    /// Padding inside node boxes.
    #[arg(long)]
    box_margin: Option<f64>,
    /// Corner radius of node boxes.
    #[arg(long)]
    box_corner_radius: Option<f64>,
}

impl GeometryArgs {
    fn layout_config(&self) -> LayoutConfig {
        let mut config = LayoutConfig::default();
        if let Some(v) = self.font_scale {
            config = config.with_font_scale(v);
        }
        if let Some(v) = self.level_separation {
            config = config.with_level_separation(v);
        }
        if let Some(v) = self.node_separation {
            config = config.with_node_separation(v);
        }
        if let Some(v) = self.box_margin {
            config = config.with_box_margin(v);
        }
        if let Some(v) = self.box_corner_radius {
            config = config.with_box_corner_radius(v);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { max } => run_check(max)?,
        Commands::Show { nodes } => run_show(nodes)?,
        Commands::Render {
            nodes,
            output,
            geometry,
        } => run_render(nodes, output, geometry)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `[0, 1, 2, ..., n]`, cell 0 unused
fn sequence(n: usize) -> Vec<i64> {
    (0..=n as i64).collect()
}

fn complete_tree(n: usize) -> Result<BinaryTree<i64>> {
    BinaryTree::from_complete(&sequence(n), n)
        .with_context(|| format!("failed to build complete tree of {n} nodes"))
}

/// Counts mismatches for one tree size
struct Checker {
    n: usize,
    failures: usize,
}

impl Checker {
    fn expect<V: PartialEq + std::fmt::Debug>(&mut self, what: &str, expected: V, got: V) {
        if expected != got {
            self.failures += 1;
            warn!(n = self.n, ?expected, ?got, "{what} mismatch");
        }
    }
}

fn run_check(max: usize) -> Result<()> {
    let mut failures = 0usize;

    for n in 0..=max {
        let elements = sequence(n);
        let tree = complete_tree(n)?;
        let mut check = Checker { n, failures: 0 };

        check.expect("is_empty()", n == 0, tree.is_empty());
        check.expect("height()", complete_tree_height(n), tree.height());
        check.expect("node_count()", n, tree.node_count());
        check.expect("leaf_count()", complete_tree_leaf_count(n), tree.leaf_count());

        let mut copy = tree.clone();
        check.expect("clone ==", true, copy == tree);
        check.expect("clone !=", false, copy != tree);

        copy.clear();
        copy.init_complete(&elements, n)?;
        check.expect("re-init ==", true, copy == tree);

        let mut assigned = BinaryTree::new();
        assigned.clone_from(&tree);
        check.expect("assignment ==", true, assigned == tree);

        let mut flat = vec![0i64; n + 1];
        let reached = assigned.to_flat_array(&mut flat, n)?;
        check.expect("to_flat_array() count", n, reached);
        check.expect("to_flat_array() elements", &elements[1..], &flat[1..]);

        failures += check.failures;
    }

    if failures > 0 {
        bail!("{failures} check(s) failed for trees of 0..={max} nodes");
    }
    info!(max, "all checks passed");
    Ok(())
}

fn run_show(n: usize) -> Result<()> {
    let tree = complete_tree(n)?;

    println!("tree: {tree}");
    println!("height: {}", tree.height());
    println!("nodes: {}", tree.node_count());
    println!("leaves: {}", tree.leaf_count());

    for (name, order) in [
        ("preorder", bintree_layout::Order::Preorder),
        ("inorder", bintree_layout::Order::Inorder),
        ("postorder", bintree_layout::Order::Postorder),
    ] {
        let mut line = String::new();
        tree.traverse(order, |e| {
            line.push_str(&e.to_string());
            line.push(' ');
        });
        println!("{name}: {}", line.trim_end());
    }
    Ok(())
}

fn run_render(n: usize, output: PathBuf, geometry: GeometryArgs) -> Result<()> {
    let tree = complete_tree(n)?;
    let engine =
        LayoutEngine::new(geometry.layout_config()).context("invalid layout geometry")?;

    let mut sink = SvgSink::with_size(geometry.width, geometry.height);
    let annotation = format!("Complete tree having {n} nodes");
    engine.render(&tree, &mut sink, &annotation);

    sink.save_page(0, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        nodes = n,
        width = sink.width(),
        height = sink.height(),
        path = %output.display(),
        "rendered tree"
    );
    Ok(())
}
