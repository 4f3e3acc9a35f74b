use crate::game::{Board, Cell, Player, Position, WinningLine};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Display color for each player's pieces.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn cell_span(cell: Cell, highlighted: bool) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Owned(player) => {
            let mut style = Style::default().fg(player_color(player));
            if highlighted {
                style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
            }
            Span::styled(" \u{25cf} ", style)
        }
    }
}

/// Build the framed board: column labels, rows, and a selection marker.
/// Cells of `winning_line` are highlighted.
pub fn board_lines(
    board: &Board,
    selected_column: Option<usize>,
    winning_line: Option<&WinningLine>,
) -> Vec<Line<'static>> {
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 4);

    let mut label_line = vec![Span::raw("   ")]; // Matches the "  ║" prefix
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            label_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            label_line.push(Span::raw(label));
        }
    }
    label_line.push(Span::raw("  ")); // Matches the " ║" suffix
    lines.push(Line::from(label_line));

    let border = "\u{2550}".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  \u{2554}{border}\u{2557}")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  \u{2551}")];
        for col in 0..width {
            let highlighted =
                winning_line.is_some_and(|line| line.contains(Position::new(row, col)));
            row_spans.push(cell_span(board.get(row, col), highlighted));
        }
        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{border}\u{255d}")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
