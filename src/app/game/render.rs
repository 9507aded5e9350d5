use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{GameScreen, CELL_H, CELL_W};
use crate::kernel::{ColumnMark, GamePhase, GRID_SIZE};

const GRID_W: u16 = CELL_W * GRID_SIZE as u16;
const GRID_H: u16 = CELL_H * GRID_SIZE as u16;
const BUTTON_W: u16 = 14;

impl GameScreen {
    pub fn render(&mut self, frame: &mut Frame) {
        let [header, band, hud, rest] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(GRID_H),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header);
        self.render_grid(frame, band);
        self.render_hud(frame, hud);
        self.render_notice(frame, rest);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("GRIDLOCK · spell the columns · drag a row, Enter locks in, q quits")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(title, area);
    }

    fn render_grid(&mut self, frame: &mut Frame, band: Rect) {
        let grid_x = band.x + band.width.saturating_sub(GRID_W) / 2;
        let grid_area = Rect::new(
            grid_x,
            band.y,
            GRID_W.min(band.width),
            GRID_H.min(band.height),
        );
        self.last_grid_area = Some(grid_area);

        let state = self.store.state();
        for (r, letters) in state.grid.rows().enumerate() {
            let dragging = state.drag.is_some_and(|d| d.row == r);
            let mut row_x = i32::from(grid_x);
            if let Some(drag) = state.drag.filter(|d| d.row == r) {
                // Cosmetic translation only; clamp so the row never leaves
                // the band.
                let min_x = i32::from(band.x);
                let max_x = (min_x + i32::from(band.width) - i32::from(GRID_W)).max(min_x);
                row_x = (row_x + drag.offset).clamp(min_x, max_x);
            }

            for (c, &letter) in letters.iter().enumerate() {
                let cell_x = row_x + c as i32 * i32::from(CELL_W);
                if cell_x < 0 {
                    continue;
                }
                let cell = Rect::new(cell_x as u16, band.y + r as u16 * CELL_H, CELL_W, CELL_H)
                    .intersection(band);
                if cell.width == 0 || cell.height == 0 {
                    continue;
                }

                let style = match state.marks[c] {
                    ColumnMark::Valid => Style::default().bg(Color::Green).fg(Color::Black),
                    ColumnMark::Invalid => Style::default().bg(Color::Red).fg(Color::Black),
                    ColumnMark::Unchecked => Style::default(),
                };
                let border_style = if dragging {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };

                let widget = Paragraph::new(letter.to_string())
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(Block::bordered().border_style(border_style));
                frame.render_widget(widget, cell);
            }
        }
    }

    fn render_hud(&mut self, frame: &mut Frame, area: Rect) {
        let hud_x = area.x + area.width.saturating_sub(GRID_W) / 2;
        let hud = Rect::new(hud_x, area.y, GRID_W.min(area.width), area.height);
        let [timer_area, score_area, button_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(BUTTON_W),
        ])
        .areas(hud);
        self.last_lockin_area = Some(button_area);

        let state = self.store.state();

        let timer_style = if state.remaining_secs <= 10 {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(format!("Time  {}", state.clock_text())).style(timer_style),
            line_of(timer_area),
        );
        frame.render_widget(
            Paragraph::new(format!("Score {}", state.score)),
            line_of(score_area),
        );

        let (label, style) = if state.phase == GamePhase::TimeUp {
            (
                "Lock In",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        } else if state.check_in_flight() {
            ("Checking…", Style::default().add_modifier(Modifier::DIM))
        } else {
            ("Lock In", Style::default().add_modifier(Modifier::BOLD))
        };
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(style));
        frame.render_widget(button, button_area);
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let widget = if let Some(notice) = &state.notice {
            Paragraph::new(notice.as_str())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
        } else if state.check_in_flight() {
            Paragraph::new("Checking columns against the dictionary…")
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::DIM))
        } else {
            return;
        };
        frame.render_widget(widget, line_of(area));
    }
}

/// First text line of an area (widgets here are one line tall).
fn line_of(area: Rect) -> Rect {
    let y = if area.height >= 3 { area.y + 1 } else { area.y };
    Rect::new(area.x, y, area.width, area.height.min(1))
}
