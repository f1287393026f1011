use eframe::egui;
use engine::game::{
    Difficulty, Direction, GameSnapshot, Point, SessionCommand, SessionPhase, SessionSettings,
};
use tokio::sync::mpsc;

use crate::state::SharedState;

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    settings: SessionSettings,
    difficulty: Difficulty,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<SessionCommand>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            settings,
            difficulty: settings.difficulty,
        }
    }

    fn send(&self, command: SessionCommand) {
        let _ = self.command_tx.send(command);
    }

    fn handle_input(&mut self, ctx: &egui::Context, phase: SessionPhase) {
        let turn = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            }
        });
        if let Some(direction) = turn {
            self.send(SessionCommand::Turn(direction));
        }

        let difficulty = ctx.input(|i| {
            if i.key_pressed(egui::Key::Num1) {
                Some(Difficulty::Easy)
            } else if i.key_pressed(egui::Key::Num2) {
                Some(Difficulty::Medium)
            } else if i.key_pressed(egui::Key::Num3) {
                Some(Difficulty::Hard)
            } else {
                None
            }
        });
        if let Some(difficulty) = difficulty
            && difficulty != self.difficulty
        {
            self.difficulty = difficulty;
            self.send(SessionCommand::SetDifficulty(difficulty));
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            match phase {
                SessionPhase::Idle => self.send(SessionCommand::Start),
                SessionPhase::Ended => self.send(SessionCommand::Restart),
                SessionPhase::Running => {}
            }
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn draw_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let cell = self.settings.grid.cell_size as f32;
        let side = self.settings.grid.canvas_size() as f32;
        let (board, _response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        let painter = ui.painter();

        painter.rect_filled(board, 0.0, egui::Color32::from_gray(20));
        for segment in &snapshot.segments {
            painter.rect_filled(
                cell_rect(board, *segment, cell).shrink(1.0),
                0.0,
                egui::Color32::from_rgb(60, 120, 255),
            );
        }
        painter.rect_filled(
            cell_rect(board, snapshot.food, cell).shrink(1.0),
            0.0,
            egui::Color32::from_rgb(220, 60, 60),
        );
    }

    fn status_line(&self) -> String {
        format!("Difficulty: {:?} (1/2/3 to change)", self.difficulty)
    }
}

fn cell_rect(board: egui::Rect, cell: Point, size: f32) -> egui::Rect {
    let min = board.min + egui::vec2(cell.x as f32 * size, cell.y as f32 * size);
    egui::Rect::from_min_size(min, egui::vec2(size, size))
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.shared_state.view();
        self.handle_input(ctx, view.phase);

        egui::CentralPanel::default().show(ctx, |ui| match view.phase {
            SessionPhase::Idle => {
                ui.heading("Grid Snake");
                ui.label("Arrows or WASD steer the snake.");
                ui.label(self.status_line());
                ui.label("Press Space to start.");
            }
            SessionPhase::Running => {
                if let Some(snapshot) = view.snapshot.as_ref() {
                    ui.label(format!("Score: {}", snapshot.score));
                    ui.label(self.status_line());
                    self.draw_board(ui, snapshot);
                }
            }
            SessionPhase::Ended => {
                ui.heading("Game Over");
                if let Some(final_score) = view.final_score {
                    ui.label(format!("Final score: {}", final_score));
                }
                if let Some(snapshot) = view.snapshot.as_ref() {
                    self.draw_board(ui, snapshot);
                }
                ui.label("Press Space to play again.");
            }
        });

        // Snapshots arrive from the session task between frames; repaint at
        // least as often as the fastest tick rate.
        ctx.request_repaint_after(std::time::Duration::from_millis(33));
    }
}
