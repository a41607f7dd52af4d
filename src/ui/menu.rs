use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::Outcome;
use crate::rules::Collision;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED").style(title_style(theme)),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    outcome: Option<Outcome>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let title = match outcome {
        Some(Outcome::BoardFilled) => "YOU WIN",
        _ => "GAME OVER",
    };
    let lines = vec![
        Line::from(title).style(title_style(theme)),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(outcome_text(outcome)),
        Line::from(""),
        Line::from("[Enter]/[Space] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn outcome_text(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        Some(Outcome::Collision(Collision::Wall)) => "Cause: hit wall",
        Some(Outcome::Collision(Collision::OwnBody)) => "Cause: hit yourself",
        Some(Outcome::BoardFilled) => "The board is full",
        None => "",
    }
}

fn title_style(theme: &Theme) -> Style {
    Style::new()
        .fg(theme.menu_title)
        .add_modifier(Modifier::BOLD)
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{centered_popup, outcome_text};
    use crate::game::Outcome;
    use crate::rules::Collision;

    #[test]
    fn popup_stays_inside_area() {
        let area = Rect::new(0, 0, 60, 30);
        let popup = centered_popup(area, 70, 40);

        assert!(popup.x > 0 && popup.right() < area.right());
        assert!(popup.y > 0 && popup.bottom() < area.bottom());
    }

    #[test]
    fn outcome_text_names_the_cause() {
        assert_eq!(
            outcome_text(Some(Outcome::Collision(Collision::Wall))),
            "Cause: hit wall"
        );
        assert_eq!(
            outcome_text(Some(Outcome::Collision(Collision::OwnBody))),
            "Cause: hit yourself"
        );
    }
}
