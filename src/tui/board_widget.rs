//! Checkers board widget for TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    widgets::{Block, Borders, Widget},
};

use crate::board::Square;
use crate::game::session::RenderModel;
use crate::tui::Theme;

/// Where the squares of the board land inside the widget's inner area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    origin_x: u16,
    origin_y: u16,
    square_width: u16,
    square_height: u16,
}

impl BoardGeometry {
    /// Lays the board out in `inner`: one column for row labels, one line of
    /// column labels above and below. Returns None if there is no room.
    pub fn compute(inner: Rect) -> Option<Self> {
        let available_width = inner.width.saturating_sub(1);
        let available_height = inner.height.saturating_sub(2);

        let square_width = (available_width / 8).min(6);
        let square_height = (available_height / 8).min(3);
        if square_width < 2 || square_height < 1 {
            return None;
        }

        Some(Self {
            origin_x: inner.x + 1,
            origin_y: inner.y + 1,
            square_width,
            square_height,
        })
    }

    /// The same layout for the outer, bordered area of the widget.
    pub fn for_widget_area(area: Rect) -> Option<Self> {
        Self::compute(Block::default().borders(Borders::ALL).inner(area))
    }

    pub fn square_origin(&self, square: Square) -> (u16, u16) {
        (
            self.origin_x + u16::from(square.col()) * self.square_width,
            self.origin_y + u16::from(square.row()) * self.square_height,
        )
    }

    /// Maps a terminal cell back to the square drawn there.
    pub fn square_at(&self, x: u16, y: u16) -> Option<Square> {
        if x < self.origin_x || y < self.origin_y {
            return None;
        }
        let col = (x - self.origin_x) / self.square_width;
        let row = (y - self.origin_y) / self.square_height;
        if row < 8 && col < 8 {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// Widget that renders a checkers board with the current selection
pub struct BoardWidget<'a> {
    model: &'a RenderModel,
    theme: &'a Theme,
    cursor: Option<Square>,
}

impl<'a> BoardWidget<'a> {
    pub fn new(model: &'a RenderModel, theme: &'a Theme) -> Self {
        Self {
            model,
            theme,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: Option<Square>) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Checkers")
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let geometry = match BoardGeometry::compute(inner) {
            Some(geometry) => geometry,
            None => return,
        };
        let right = inner.x + inner.width;
        let bottom = inner.y + inner.height;

        // Column labels above and below the board
        for col in 0u8..8 {
            let (x, _) = geometry.square_origin(Square::new(0, col));
            let x = x + geometry.square_width / 2;
            for y in [inner.y, geometry.origin_y + 8 * geometry.square_height].iter() {
                if x < right && *y < bottom {
                    if let Some(cell) = buf.cell_mut((x, *y)) {
                        cell.set_char((b'0' + col) as char)
                            .set_style(self.theme.text_style());
                    }
                }
            }
        }

        for square in Square::all() {
            let (x, y) = geometry.square_origin(square);

            if square.col() == 0 {
                let label_y = y + geometry.square_height / 2;
                if label_y < bottom {
                    if let Some(cell) = buf.cell_mut((inner.x, label_y)) {
                        cell.set_char((b'0' + square.row()) as char)
                            .set_style(self.theme.text_style());
                    }
                }
            }

            let background = if self.model.selected == Some(square) {
                self.theme.selected
            } else if self.cursor == Some(square) {
                self.theme.cursor
            } else {
                self.theme.square_background(square.is_dark())
            };

            let piece = self.model.board.get(square);
            let (symbol, owner) = match piece {
                Some(piece) => (piece.to_unicode_char(), Some(piece.owner)),
                None if self.model.is_move_target(square) => ('•', None),
                None => (' ', None),
            };
            let mut style = self.theme.piece_style(background, owner);
            if self.cursor == Some(square) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            for dy in 0..geometry.square_height {
                for dx in 0..geometry.square_width {
                    let cell_x = x + dx;
                    let cell_y = y + dy;
                    if cell_x >= right || cell_y >= bottom {
                        continue;
                    }
                    let is_center =
                        dx == geometry.square_width / 2 && dy == geometry.square_height / 2;
                    let ch = if is_center { symbol } else { ' ' };
                    if let Some(cell) = buf.cell_mut((cell_x, cell_y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
        }
    }
}
