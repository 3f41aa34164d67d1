//! Main application window for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::game::{Outcome, Phase};
use crate::Stone;

use super::board_view::BoardView;
use super::session::Session;
use super::theme::*;

/// Main application
pub struct GobangApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GobangApp {
    fn default() -> Self {
        Self {
            session: Session::new(),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You: Black");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Phase::Finished(outcome) = self.session.game.phase() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (label, status, status_color) = match self.session.game.phase() {
                Phase::HumanTurn => ("BLACK", "Your turn", TIMER_NORMAL),
                Phase::EngineTurn => ("WHITE", "Engine thinking...", TIMER_WARNING),
                Phase::Finished(_) => ("", "Game over", WIN_HIGHLIGHT),
            };

            let stone_char = match self.session.game.phase() {
                Phase::HumanTurn => "●",
                Phase::EngineTurn => "○",
                Phase::Finished(_) => "■",
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(stone_char).size(26.0).color(TEXT_PRIMARY));
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    if !label.is_empty() {
                        ui.label(RichText::new(label).size(16.0).strong().color(TEXT_PRIMARY));
                    }
                    ui.label(RichText::new(status).size(12.0).color(status_color));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 3.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(
                    RichText::new(format!("{secs:.2}s"))
                        .size(26.0)
                        .strong()
                        .color(color),
                );
            } else if let Some(result) = &self.session.last_result {
                ui.label(
                    RichText::new(format!("Last engine move: {:.3}s", result.time_ms as f64 / 1000.0))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
            } else {
                ui.label(RichText::new("—").size(18.0).color(TEXT_MUTED));
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.session.last_result {
                    ui.label(
                        RichText::new(format!("Score: {}", result.score))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    if let Some(pos) = result.pos {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("→ ({}, {})", pos.row, pos.col))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let (headline, detail) = match outcome {
            Outcome::Win(Stone::Black) => ("YOU WIN!", "five in a row"),
            Outcome::Win(_) => ("ENGINE WINS", "five in a row"),
            Outcome::Draw => ("DRAW", "the board is full"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));

                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let hover_stone = self
                .session
                .accepts_clicks()
                .then(|| self.session.game.human_color());

            let clicked = self.board_view.show(
                ui,
                self.session.game.board(),
                hover_stone,
                self.session.game.last_move(),
                self.session.game.winning_line(),
            );

            if let Some(pos) = clicked {
                self.session.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Collect a finished search and start the next one if it is the
        // engine's turn.
        self.session.poll();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_thinking() {
            ctx.request_repaint();
        }
    }
}
