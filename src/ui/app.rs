//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::board::Stone;
use crate::config::GameConfig;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    /// Settings new games start from
    config: GameConfig,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            config: state.config,
            state,
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        match GameState::with_mode(mode, self.config) {
            Ok(state) => self.state = state,
            Err(err) => self.state.message = Some(err.to_string()),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        ("New Game (Human X vs Agent)", GameMode::HumanVsAgent { human: Stone::X }),
                        ("New Game (Human O vs Agent)", GameMode::HumanVsAgent { human: Stone::O }),
                        ("New Game (Human vs Human)", GameMode::HumanVsHuman),
                        ("New Game (Agent vs Agent)", GameMode::AgentVsAgent),
                    ];
                    for (label, mode) in modes {
                        if ui.button(label).clicked() {
                            self.new_game(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode() {
                        GameMode::HumanVsAgent { human } => {
                            format!("Human vs Agent - You: {}", human.symbol())
                        }
                        GameMode::HumanVsHuman => "Human vs Human".to_string(),
                        GameMode::AgentVsAgent => "Agent vs Agent".to_string(),
                    };
                    let size = self.state.board.size();
                    ui.label(format!("{mode_text} | {size}x{size}"));
                });
            });
        });
    }

    /// Render the side panel with game info and search diagnostics
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_timer_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let scan = match self.config.line_scan {
                crate::eval::LineScan::VerticalOnly => "vertical scan",
                crate::eval::LineScan::AllDirections => "all-direction scan",
            };
            ui.label(
                RichText::new(format!("depth {} · {}", self.config.search_depth, scan))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (stone_char, accent, stone_color) = match turn {
                Stone::O => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
                _ => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("PLAYER {}", turn.symbol()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("Agent thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Agent to move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            caption(ui, "TIMER");
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last agent move: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            caption(ui, "ACTIONS");
            ui.add_space(8.0);

            let hint_allowed = self.state.mode() == GameMode::HumanVsHuman;
            let (restart, hint) = ui
                .horizontal(|ui| {
                    let restart = action_button(ui, BUTTON_BG, button_text("New Game", 12.0));
                    ui.add_space(4.0);
                    let hint = hint_allowed && action_button(ui, BUTTON_BG, button_text("Hint", 12.0));
                    (restart, hint)
                })
                .inner;

            if restart {
                self.state.reset();
            }
            if hint {
                self.state.request_suggestion();
            }

            ui.add_space(8.0);
            let moves = format!("Move #{}", self.state.move_count());
            ui.label(RichText::new(moves).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                caption(ui, "SEARCH");
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    caption(ui, "No search yet");
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{:?}", result.search_type))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(
                            RichText::new(format!("Score: {}", result.score))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}ms", result.time_ms))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("→ {}", pos))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let (headline, symbol, accent) = match result.winner {
            Some(Stone::O) => ("PLAYER O WINS!", "○", egui::Color32::from_rgb(220, 220, 225)),
            Some(_) => ("PLAYER X WINS!", "●", egui::Color32::from_rgb(70, 70, 75)),
            None => ("DRAW", "●○", TEXT_SECONDARY),
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
                    ui.label(RichText::new(symbol).size(32.0).color(accent));
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    if result.winning_line.is_some() {
                        ui.label(RichText::new("by 5-in-a-row").size(11.0).color(TEXT_SECONDARY));
                    }

                    ui.add_space(12.0);

                    if action_button(ui, GAME_OVER_BUTTON, button_text("New Game", 14.0).strong()) {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let overlay = BoardOverlay {
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                winning_line: self.state.game_over.and_then(|r| r.winning_line),
                accepts_input: self.state.game_over.is_none()
                    && self.state.is_human_turn()
                    && !self.state.is_ai_thinking(),
            };

            if let Some(pos) = self.board_view.show(ui, &self.state.board, &overlay) {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    log::warn!("rejected click at {pos}: {msg}");
                    self.state.message = Some(msg);
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint && self.state.mode() == GameMode::HumanVsHuman {
            self.state.request_suggestion();
        }
        if restart {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

/// Small grey heading at the top of a card
fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(TEXT_MUTED));
}

fn button_text(text: &str, size: f32) -> RichText {
    RichText::new(text).size(size).color(TEXT_PRIMARY)
}

/// Clickable label on a rounded fill; true when clicked this frame
fn action_button(ui: &mut egui::Ui, fill: egui::Color32, text: RichText) -> bool {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(8.0)
        .show(ui, |ui| ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked())
        .inner
}
