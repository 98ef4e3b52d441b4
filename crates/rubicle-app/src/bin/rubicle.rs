//! Rubicle command-line front-end.
//!
//! Drives the cube model and the solver service from a terminal:
//!
//! ```sh
//! cargo run -- solve --scramble 20
//! cargo run -- solve --state grid.json
//! cargo run -- history
//! cargo run -- demo --moves 8 --seed 42
//! ```

use std::{error::Error, fs, path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use log::info;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use rubicle_app::{
    controls::CubeControls,
    history_view::{HistoryView, record_summary},
};
use rubicle_client::{DEFAULT_BASE_URL, SolverClient};
use rubicle_core::FaceGrid;
use rubicle_cube::LayerMove;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Base URL of the solver service.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Derive the cube state and request a solution.
    Solve {
        /// Scramble the cube with this many random moves first.
        #[arg(long, value_name = "COUNT")]
        scramble: Option<usize>,

        /// Load the cube state from a JSON grid file instead of the
        /// solved cube (`[[[0,0,0],...],...]`, six faces of 3x3).
        #[arg(long, value_name = "FILE", conflicts_with = "scramble")]
        state: Option<PathBuf>,

        /// Seed for the scramble (random if omitted).
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },

    /// List past solves recorded by the service.
    History,

    /// Scramble a cube and print the derived grid after every move.
    Demo {
        /// Number of scramble moves.
        #[arg(long, value_name = "COUNT", default_value_t = 5)]
        moves: usize,

        /// Seed for the scramble (random if omitted).
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let client = SolverClient::new(&cli.base_url);
    match &cli.command {
        Command::Solve {
            scramble,
            state,
            seed,
        } => solve(client, *scramble, state.as_deref(), *seed),
        Command::History => history(&client),
        Command::Demo { moves, seed } => {
            demo(client, *moves, *seed);
            Ok(())
        }
    }
}

fn solve(
    client: SolverClient,
    scramble: Option<usize>,
    state: Option<&std::path::Path>,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let mut controls = CubeControls::new(client).with_pacing(Duration::ZERO);

    if let Some(path) = state {
        let nested: Vec<Vec<Vec<i8>>> = serde_json::from_str(&fs::read_to_string(path)?)?;
        let grid = FaceGrid::from_nested(&nested)?;
        load_grid(&mut controls, &grid);
    } else if let Some(count) = scramble {
        let mut rng = seeded_rng(seed);
        let moves = controls.cube_mut().scramble(&mut rng, count);
        info!("scrambled with {} moves", moves.len());
    }

    let grid = controls.current_state();
    println!("cube:     {}", grid.facelet_string()?);

    let solution = controls.solve()?;
    println!("solution: {}", solution.moves.join(" "));
    println!(
        "          {} moves in {} ms",
        solution.move_count, solution.solve_time_ms
    );
    Ok(())
}

fn history(client: &SolverClient) -> Result<(), Box<dyn Error>> {
    match HistoryView::fetch(client) {
        HistoryView::Loaded { solves } if solves.is_empty() => {
            println!("no solves recorded yet");
            Ok(())
        }
        HistoryView::Loaded { solves } => {
            for record in &solves {
                println!("{}", record_summary(record));
                println!("  {}", record.solution.join(" "));
            }
            Ok(())
        }
        HistoryView::Failed { error } => Err(error.into()),
        HistoryView::Loading => unreachable!("fetch always settles"),
    }
}

fn demo(client: SolverClient, count: usize, seed: Option<u64>) {
    let mut controls = CubeControls::new(client).with_pacing(Duration::ZERO);
    let mut rng = seeded_rng(seed);
    let moves: Vec<LayerMove> = (0..count).map(|_| LayerMove::random(&mut rng)).collect();

    for mv in moves {
        controls.execute_sequence(&[mv]);
        let grid = controls.current_state();
        println!("{mv}");
        println!("{grid}");
    }
}

/// Rebuilds the live cube so its derived grid matches `grid`.
///
/// Sticker painting is per-cubelet, so this maps each grid cell back
/// through the solved-cube projection: on a solved cube every cubelet
/// sits at its home lattice point with identity orientation, which
/// makes the cell-to-sticker correspondence fixed and invertible.
fn load_grid(controls: &mut CubeControls, grid: &FaceGrid) {
    use rubicle_core::Face;

    controls.reset();
    for face in Face::ALL {
        for row in 0..3 {
            for col in 0..3 {
                let Some(color) = grid.color_at(face, row, col) else {
                    continue;
                };
                let (id, local) = solved_cell_target(face, row, col);
                // Every id produced below exists on a fresh cube.
                controls
                    .paint_face(id, local, color)
                    .unwrap_or_else(|e| unreachable!("{e}"));
            }
        }
    }
}

/// Inverse of the solved-cube projection for one cell.
#[expect(clippy::cast_possible_truncation)]
fn solved_cell_target(
    face: rubicle_core::Face,
    row: usize,
    col: usize,
) -> (rubicle_cube::CubeletId, rubicle_cube::LocalFace) {
    use rubicle_core::Face;
    use rubicle_cube::{CubeletId, LocalFace};

    let (row, col) = (row as i8, col as i8);
    match face {
        Face::Up => (CubeletId::new(col - 1, 1, 1 - row), LocalFace::Top),
        Face::Down => (CubeletId::new(col - 1, -1, row - 1), LocalFace::Bottom),
        Face::Front => (CubeletId::new(col - 1, 1 - row, 1), LocalFace::Front),
        Face::Back => (CubeletId::new(1 - col, 1 - row, -1), LocalFace::Back),
        Face::Right => (CubeletId::new(1, 1 - row, 1 - col), LocalFace::Right),
        Face::Left => (CubeletId::new(-1, 1 - row, col - 1), LocalFace::Left),
    }
}

fn seeded_rng(seed: Option<u64>) -> Pcg64Mcg {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!("rng seed: {seed}");
    Pcg64Mcg::seed_from_u64(seed)
}
