use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use binarytree::generate::{random_bst, random_heap, random_tree};
use binarytree::{
    build, build_compact, level_index, GeneratorConfig, Node, NodeValue, PrettyPrintOptions,
    SvgOptions,
};

#[derive(Parser, Debug)]
#[command(name = "binarytree", about = "Build, inspect and draw binary trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Tree given on the command line
#[derive(Args, Debug)]
struct TreeInput {
    /// Comma-separated level-order values; `null`, `none` or `_` marks a gap
    values: String,
    /// Parse values as floating point numbers instead of integers
    #[arg(long)]
    float: bool,
    /// Read the compact form where only present nodes own child slots
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pretty-print a tree.
    Show {
        #[command(flatten)]
        input: TreeInput,
        /// Prefix every node with its level-order index.
        #[arg(long)]
        index: bool,
        /// Text between index and value.
        #[arg(long, default_value = "-")]
        delimiter: String,
    },
    /// Print structural properties.
    Props {
        #[command(flatten)]
        input: TreeInput,
    },
    /// Print node values in traversal order.
    Traverse {
        #[command(flatten)]
        input: TreeInput,
        #[arg(long, value_enum, default_value_t = Order::Level)]
        order: Order,
    },
    /// Print the subtree at a level-order index.
    Get {
        #[command(flatten)]
        input: TreeInput,
        /// Level-order index (root is 0).
        #[arg(long, allow_negative_numbers = true)]
        at: i64,
    },
    /// Render the tree as SVG.
    Svg {
        #[command(flatten)]
        input: TreeInput,
        /// Node radius in pixels.
        #[arg(long, default_value_t = 16)]
        radius: u32,
    },
    /// Render the tree as a Graphviz DOT digraph.
    Dot {
        #[command(flatten)]
        input: TreeInput,
    },
    /// Generate a random tree, BST or heap.
    Random {
        #[arg(long, value_enum, default_value_t = Kind::Tree)]
        kind: Kind,
        /// Tree height (0 - 9).
        #[arg(long, default_value_t = 3)]
        height: usize,
        /// Fill every level.
        #[arg(long)]
        perfect: bool,
        /// Build a min-heap instead of a max-heap.
        #[arg(long)]
        min: bool,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Pre,
    In,
    Post,
    Level,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Tree,
    Bst,
    Heap,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Random {
            kind,
            height,
            perfect,
            min,
            seed,
        } => run_random(kind, height, perfect, min, seed),
        command => {
            let float = command_input(&command).map_or(false, |input| input.float);
            if float {
                run_tree_command::<f64>(command)
            } else {
                run_tree_command::<i64>(command)
            }
        }
    }
}

fn command_input(command: &Commands) -> Option<&TreeInput> {
    match command {
        Commands::Show { input, .. }
        | Commands::Props { input }
        | Commands::Traverse { input, .. }
        | Commands::Get { input, .. }
        | Commands::Svg { input, .. }
        | Commands::Dot { input } => Some(input),
        Commands::Random { .. } => None,
    }
}

fn run_tree_command<T>(command: Commands) -> Result<()>
where
    T: NodeValue + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(input) = command_input(&command) else {
        bail!("command does not take a tree");
    };
    let root: Node<T> = load_tree(input)?;

    match &command {
        Commands::Show {
            index, delimiter, ..
        } => {
            let options = PrettyPrintOptions::default()
                .with_index(*index)
                .with_delimiter(delimiter.as_str());
            println!("{}", root.pretty(&options));
        }
        Commands::Props { .. } => print_properties(&root),
        Commands::Traverse { order, .. } => {
            let nodes = match order {
                Order::Pre => root.preorder(),
                Order::In => root.inorder(),
                Order::Post => root.postorder(),
                Order::Level => root.levelorder(),
            };
            let labels: Vec<String> = nodes.iter().map(|node| node.value().label()).collect();
            println!("{}", labels.join(" "));
        }
        Commands::Get { at, .. } => {
            let index = level_index(*at)?;
            let node = root
                .get(index)
                .with_context(|| format!("cannot read index {index}"))?;
            println!("{node}");
        }
        Commands::Svg { radius, .. } => {
            print!("{}", root.svg(&SvgOptions::default().with_node_radius(*radius)));
        }
        Commands::Dot { .. } => print!("{}", root.to_dot()),
        Commands::Random { .. } => bail!("command does not take a tree"),
    }

    Ok(())
}

fn load_tree<T>(input: &TreeInput) -> Result<Node<T>>
where
    T: NodeValue + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values = parse_values::<T>(&input.values)?;
    debug!(entries = values.len(), compact = input.compact, "parsed tree input");
    let root = if input.compact {
        build_compact(&values)
    } else {
        build(&values)
    }
    .context("malformed tree")?;

    match root {
        Some(root) => Ok(root),
        None => bail!("tree is empty"),
    }
}

fn parse_values<T>(text: &str) -> Result<Vec<Option<T>>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| match token.to_ascii_lowercase().as_str() {
            "null" | "none" | "_" => Ok(None),
            _ => token
                .parse()
                .map(Some)
                .with_context(|| format!("invalid value {token:?} at position {position}")),
        })
        .collect()
}

fn print_properties<T: NodeValue>(root: &Node<T>) {
    let props = root.properties();
    let s = &props.structure;
    println!("height:          {}", s.height);
    println!("size:            {}", s.size);
    println!("leaf_count:      {}", s.leaf_count);
    println!("min_node_value:  {}", s.min_node_value.label());
    println!("max_node_value:  {}", s.max_node_value.label());
    println!("min_leaf_depth:  {}", s.min_leaf_depth);
    println!("max_leaf_depth:  {}", s.max_leaf_depth);
    println!("is_balanced:     {}", props.is_balanced);
    println!("is_bst:          {}", props.is_bst);
    println!("is_symmetric:    {}", props.is_symmetric);
    println!("is_complete:     {}", s.is_complete);
    println!("is_strict:       {}", s.is_strict);
    println!("is_perfect:      {}", s.is_perfect);
    println!("is_max_heap:     {}", s.is_max_heap);
    println!("is_min_heap:     {}", s.is_min_heap);
}

fn run_random(kind: Kind, height: usize, perfect: bool, min: bool, seed: Option<u64>) -> Result<()> {
    let config = GeneratorConfig::new(height)?
        .with_perfect(perfect)
        .with_max(!min);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let root = match kind {
        Kind::Tree => random_tree(&config, &mut rng),
        Kind::Bst => random_bst(&config, &mut rng),
        Kind::Heap => random_heap(&config, &mut rng),
    };

    println!("{root}");
    let values: Vec<String> = root
        .values()
        .into_iter()
        .map(|value| value.map_or_else(|| "null".to_string(), |v| v.to_string()))
        .collect();
    println!("\n{}", values.join(","));
    Ok(())
}
