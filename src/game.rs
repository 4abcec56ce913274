//! Session context tying board, backend and interaction together

use log::{error, info};

use crate::board::{BoardState, Cell, Side};
use crate::config::GameConfig;
use crate::error::{CheckersError, Result};
use crate::interaction::{HighlightController, HoverTracker, PickOutcome, Selection, SelectionController};
use crate::scene::{OrthoCamera, PickHit, RenderBackend, Scene, ScreenPoint, VisualHandle};

/// One committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub from: Cell,
    pub to: Cell,
}

/// Everything one game session owns
///
/// Built once per session and handed to the view; there is no global state.
pub struct Game<B: RenderBackend = Scene> {
    config: GameConfig,
    board: BoardState,
    backend: B,
    camera: OrthoCamera,
    selection: SelectionController,
    hover: HoverTracker,
    history: Vec<MoveRecord>,
}

impl Game<Scene> {
    /// Game rendered into a fresh [`Scene`]
    pub fn with_scene(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let scene = Scene::new(&config);
        Self::new(config, scene)
    }
}

impl<B: RenderBackend> Game<B> {
    /// Game rendered into `backend`, which must be laid out for `config`
    pub fn new(config: GameConfig, mut backend: B) -> Result<Self> {
        config.validate()?;
        if let Some(size) = backend.board_size() {
            if size != config.board_size {
                return Err(CheckersError::InvalidConfig(format!(
                    "backend draws a {}x{} board but the config asks for {}x{}",
                    size, size, config.board_size, config.board_size
                )));
            }
        }
        let board = BoardState::initialize(config.board_size, config.square_size, &mut backend);
        info!(
            "new {}x{} game, {} side in control",
            config.board_size,
            config.board_size,
            config.controlling_side.name()
        );

        Ok(Self {
            camera: OrthoCamera::from_config(&config),
            selection: SelectionController::new(config.controlling_side),
            hover: HoverTracker::new(),
            history: Vec::new(),
            config,
            board,
            backend,
        })
    }

    /// Handle a primary-button click at a normalized screen point
    pub fn click(&mut self, point: ScreenPoint) -> PickOutcome {
        let pick = self.backend.pick_topmost(point, &self.camera);
        self.handle_pick(pick)
    }

    /// Feed an already resolved pick into the selection state machine
    ///
    /// Invariant violations are logged and the event is dropped.
    pub fn handle_pick(&mut self, pick: Option<PickHit>) -> PickOutcome {
        self.hover.clear();

        match self.selection.on_pick(pick, &mut self.board, &mut self.backend) {
            Ok(PickOutcome::Moved { from, to }) => {
                let side = self.config.controlling_side;
                self.history.push(MoveRecord { side, from, to });
                PickOutcome::Moved { from, to }
            }
            Ok(outcome) => outcome,
            Err(e) => {
                error!("pick {:?} dropped: {}", pick, e);
                self.selection.clear(&mut self.backend);
                PickOutcome::Ignored
            }
        }
    }

    /// Update hover feedback; returns true if a repaint is needed
    pub fn hover(&mut self, point: ScreenPoint) -> bool {
        let pick = self.backend.pick_topmost(point, &self.camera);
        self.hover.update(pick)
    }

    pub fn pointer_left(&mut self) -> bool {
        self.hover.update(None)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear(&mut self.backend);
        self.hover.clear();
    }

    /// Start over from the opening position
    pub fn reset(&mut self) {
        self.clear_selection();
        self.board.clear(&mut self.backend);
        self.board = BoardState::initialize(
            self.config.board_size,
            self.config.square_size,
            &mut self.backend,
        );
        self.history.clear();
        info!("game reset");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection.selection()
    }

    pub fn highlights(&self) -> &HighlightController {
        self.selection.highlights()
    }

    pub fn hovered(&self) -> Option<VisualHandle> {
        self.hover.hovered()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}
