//! Command-line interface and the interactive game driver

use std::io;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::io::catalog::ImageCatalog;
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_IMAGE_DIR, DEFAULT_SEED, DEFAULT_TILE_PIXELS, EXHAUSTED_BANNER,
    INPUT_POLL_INTERVAL_MS, PROGRESS_BAR_WIDTH, SOLVED_BANNER,
};
use crate::io::error::Result;
use crate::io::image::{PictureSource, load_board_image};
use crate::puzzle::grid::{MoveResult, validate_size};
use crate::puzzle::session::{Advance, PuzzleSession, SkipReport};
use crate::puzzle::tile::GridPos;
use crate::tui::input::{self, PlayerCommand};
use crate::tui::screen::{self, BoardLayout, TerminalGuard};

static PREFLIGHT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Parser)]
#[command(name = "picslide")]
#[command(author, version, about = "Sliding picture puzzle for the terminal")]
/// Command-line arguments for the puzzle game
pub struct Cli {
    /// Directory holding the puzzle images (jpg or png)
    #[arg(value_name = "IMAGE_DIR", default_value = DEFAULT_IMAGE_DIR)]
    pub image_dir: PathBuf,

    /// Board dimension N for an N x N puzzle
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Random seed for reproducible shuffles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Edge length of each sliced tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub tile_pixels: u32,

    /// Check every image in the directory and exit without playing
    #[arg(short, long)]
    pub preflight: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and summaries should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

// What the player is looking at between commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    Solved,
    Finished,
}

/// Orchestrates catalog scanning, session flow, and the terminal loop
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested mode: preflight validation or the game itself
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is out of range, the image directory
    /// cannot be read, or the terminal cannot be driven.
    pub fn run(&self) -> Result<()> {
        validate_size(self.cli.grid_size)?;

        let catalog = ImageCatalog::scan(&self.cli.image_dir)?;

        if self.cli.preflight {
            return self.preflight(&catalog);
        }

        if catalog.is_empty() {
            self.note(&format!(
                "No puzzle images found in '{}'",
                self.cli.image_dir.display()
            ));
            return Ok(());
        }

        self.play(catalog)
    }

    fn play(&self, catalog: ImageCatalog) -> Result<()> {
        let total = catalog.len();
        let display_paths = catalog.paths().to_vec();
        let source = PictureSource::new(
            catalog.into_paths(),
            self.cli.grid_size,
            self.cli.tile_pixels,
        );
        let mut session = PuzzleSession::new(source, self.cli.grid_size, self.cli.seed)?;

        let mut skipped = Vec::new();
        let first_index = match session.advance() {
            Advance::NextPuzzle {
                index,
                skipped: early,
            } => {
                skipped.extend(early);
                index
            }
            Advance::Exhausted { skipped: early } => {
                skipped.extend(early);
                self.report_skipped(&display_paths, &skipped);
                self.note("No playable images; every file failed to load.");
                return Ok(());
            }
        };

        let outcome = self.run_game_loop(&mut session, first_index, total, &mut skipped);
        self.report_skipped(&display_paths, &skipped);
        outcome
    }

    fn run_game_loop(
        &self,
        session: &mut PuzzleSession<PictureSource>,
        first_index: usize,
        total: usize,
        skipped: &mut Vec<SkipReport>,
    ) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut stdout = io::stdout();

        let poll = Duration::from_millis(INPUT_POLL_INTERVAL_MS);
        let mut picture_index = first_index;
        let mut moves = 0usize;
        let mut phase = Phase::Playing;
        let mut needs_redraw = true;

        loop {
            let (cols, rows) = screen::terminal_size()?;
            let layout = BoardLayout::centered(cols, rows, self.cli.grid_size);

            if needs_redraw {
                Self::draw_frame(
                    &mut stdout,
                    session,
                    &layout,
                    cols,
                    rows,
                    picture_index,
                    total,
                    moves,
                    phase,
                )?;
                needs_redraw = false;
            }

            let Some(command) = input::read_command(poll, &layout)? else {
                continue;
            };

            if command == PlayerCommand::Quit {
                return Ok(());
            }
            if command == PlayerCommand::Redraw {
                needs_redraw = true;
                continue;
            }

            match phase {
                Phase::Playing => match command {
                    PlayerCommand::Select(target) => {
                        needs_redraw = Self::dispatch_move(session, target, &mut moves, &mut phase);
                    }
                    PlayerCommand::Slide(direction) => {
                        let target = session.grid().and_then(|grid| {
                            direction.target_beside(grid.empty_position(), grid.size())
                        });
                        if let Some(target) = target {
                            needs_redraw =
                                Self::dispatch_move(session, target, &mut moves, &mut phase);
                        }
                    }
                    PlayerCommand::NextImage => {
                        phase =
                            Self::advance_picture(session, skipped, &mut picture_index, &mut moves);
                        needs_redraw = true;
                    }
                    PlayerCommand::Quit | PlayerCommand::Redraw | PlayerCommand::Other => {}
                },
                // Any key moves on once the picture is reassembled
                Phase::Solved => {
                    phase = Self::advance_picture(session, skipped, &mut picture_index, &mut moves);
                    needs_redraw = true;
                }
                // Any key leaves the closing screen
                Phase::Finished => return Ok(()),
            }
        }
    }

    // Feed one clicked or keyed target through the board's move check
    fn dispatch_move(
        session: &mut PuzzleSession<PictureSource>,
        target: GridPos,
        moves: &mut usize,
        phase: &mut Phase,
    ) -> bool {
        let Some(grid) = session.grid_mut() else {
            return false;
        };

        if grid.try_move(target) != MoveResult::Accepted {
            return false;
        }

        *moves += 1;
        if grid.is_solved() {
            *phase = Phase::Solved;
        }
        true
    }

    // Move the session forward, folding new skip reports into the list
    fn advance_picture(
        session: &mut PuzzleSession<PictureSource>,
        skipped: &mut Vec<SkipReport>,
        picture_index: &mut usize,
        moves: &mut usize,
    ) -> Phase {
        match session.advance() {
            Advance::NextPuzzle {
                index,
                skipped: new,
            } => {
                skipped.extend(new);
                *picture_index = index;
                *moves = 0;
                Phase::Playing
            }
            Advance::Exhausted { skipped: new } => {
                skipped.extend(new);
                Phase::Finished
            }
        }
    }

    // Paint whichever screen the current phase calls for
    fn draw_frame(
        out: &mut impl io::Write,
        session: &PuzzleSession<PictureSource>,
        layout: &BoardLayout,
        cols: u16,
        rows: u16,
        picture_index: usize,
        total: usize,
        moves: usize,
        phase: Phase,
    ) -> Result<()> {
        let grid = match session.grid() {
            Some(grid) if phase != Phase::Finished => grid,
            _ => return screen::draw_closing(out, cols, rows, EXHAUSTED_BANNER),
        };

        let status = format!(
            "picslide  |  picture {} of {total}  |  moves: {moves}",
            picture_index + 1
        );
        let banner = (phase == Phase::Solved).then_some(SOLVED_BANNER);

        screen::draw_board(out, grid, layout, &status, banner)
    }

    // Allow print for the validation summary
    #[allow(clippy::print_stderr)]
    fn preflight(&self, catalog: &ImageCatalog) -> Result<()> {
        if catalog.is_empty() {
            self.note(&format!(
                "No puzzle images found in '{}'",
                self.cli.image_dir.display()
            ));
            return Ok(());
        }

        let bar = self.cli.should_show_progress().then(|| {
            ProgressBar::new(catalog.len() as u64).with_style(PREFLIGHT_STYLE.clone())
        });

        let mut playable = 0usize;
        let mut broken = Vec::new();

        for path in catalog.paths() {
            if let Some(ref bar) = bar {
                bar.set_message(path.display().to_string());
            }

            match load_board_image(path, self.cli.grid_size, self.cli.tile_pixels) {
                Ok(_) => playable += 1,
                Err(error) => broken.push((path, error)),
            }

            if let Some(ref bar) = bar {
                bar.inc(1);
            }
        }

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        if !self.cli.quiet {
            eprintln!("{playable} playable, {} broken", broken.len());
            for (path, error) in &broken {
                eprintln!("  {}: {error}", path.display());
            }
        }

        Ok(())
    }

    // Allow print for user feedback after the terminal is restored
    #[allow(clippy::print_stderr)]
    fn report_skipped(&self, paths: &[PathBuf], skipped: &[SkipReport]) {
        if self.cli.quiet || skipped.is_empty() {
            return;
        }

        eprintln!("Skipped {} image(s):", skipped.len());
        for report in skipped {
            let name = paths.get(report.index).map_or_else(
                || format!("image {}", report.index),
                |path| path.display().to_string(),
            );
            eprintln!("  {name}: {}", report.error);
        }
    }

    // Allow print for user feedback on stderr
    #[allow(clippy::print_stderr)]
    fn note(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}
