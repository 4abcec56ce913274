//! Main application for the checkers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use log::debug;

use crate::board::Side;
use crate::config::GameConfig;
use crate::error::Result;
use crate::interaction::PickOutcome;
use crate::Game;

use super::board_view::BoardView;
use super::theme::*;

/// Main checkers application
pub struct CheckersApp {
    game: Game,
    board_view: BoardView,
    show_panel: bool,
    /// Feedback for the last click
    message: Option<String>,
}

impl CheckersApp {
    /// Create a new app running one session with `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Result<Self> {
        Ok(Self {
            game: Game::with_scene(config)?,
            board_view: BoardView::default(),
            show_panel: true,
            message: None,
        })
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Clear Selection (Esc)").clicked() {
                        self.game.clear_selection();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_panel, "Side Panel (P)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.game.config().board_size;
                    ui.label(format!("{}x{} board", size, size));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(10.0);
                self.render_control_card(ui);
                ui.add_space(10.0);
                self.render_moves_card(ui);

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_SECONDARY));
                }

                ui.add_space(10.0);
                ui.label(
                    RichText::new("Click one of your pieces, then a green square.")
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Controlling side and current selection
    fn render_control_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("YOU PLAY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let side = self.game.config().controlling_side;
            let (name, color) = match side {
                Side::Near => ("RED", NEAR_PIECE),
                Side::Far => ("BLACK", TEXT_PRIMARY),
            };
            ui.label(RichText::new(name).size(18.0).strong().color(color));

            ui.add_space(6.0);
            let status = match self.game.selection() {
                Some(selection) => format!(
                    "Selected {} ({} move{})",
                    selection.cell,
                    self.game.highlights().len(),
                    if self.game.highlights().len() == 1 { "" } else { "s" }
                ),
                None => "Nothing selected".to_string(),
            };
            ui.label(RichText::new(status).size(12.0).color(ACCENT));
        });
    }

    /// Move counter and the most recent moves
    fn render_moves_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let history = self.game.history();
            ui.label(RichText::new(format!("MOVES ({})", history.len())).size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for record in history.iter().rev().take(RECENT_MOVES) {
                ui.label(
                    RichText::new(format!("{} -> {}", record.from, record.to))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render the main board and apply pointer input
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG))
            .show(ctx, |ui| {
                let input = self.board_view.show(ui, &self.game);

                let hover_changed = match input.hovered {
                    Some(point) => self.game.hover(point),
                    None => self.game.pointer_left(),
                };

                if let Some(point) = input.clicked {
                    let outcome = self.game.click(point);
                    debug!("click at ({:.2}, {:.2}): {:?}", point.x, point.y, outcome);
                    self.message = match outcome {
                        PickOutcome::Moved { from, to } => Some(format!("Moved {} -> {}", from, to)),
                        _ => None,
                    };
                }

                if hover_changed || input.clicked.is_some() {
                    ctx.request_repaint();
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, clear, toggle_panel) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::P),
            )
        });

        if new_game {
            self.new_game();
        }
        if clear {
            self.game.clear_selection();
        }
        if toggle_panel {
            self.show_panel = !self.show_panel;
        }
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        if self.show_panel {
            self.render_side_panel(ctx);
        }
        self.render_board(ctx);
    }
}
