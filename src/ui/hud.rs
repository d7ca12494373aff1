use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::scene::Scene;

/// Columns between the board and the side panel.
pub const HUD_GAP_X: u16 = 2;

/// Renders the side panel and returns the play area left of it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, scene: &Scene, theme: &Theme) -> Rect {
    let [play_area, _, panel_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(HUD_GAP_X),
        Constraint::Length(hud_width(scene)),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(panel_lines(scene, theme)), panel_area);

    play_area
}

/// Width of the widest panel row, so long player names are never cut.
#[must_use]
pub fn hud_width(scene: &Scene) -> u16 {
    let widest = [scene.score_line(), high_score_text(scene)]
        .into_iter()
        .chain(scene.recent_lines())
        .map(|line| line.width())
        .max()
        .unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

fn high_score_text(scene: &Scene) -> String {
    format!("High {}", scene.high_score_line())
}

fn panel_lines<'a>(scene: &Scene, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::styled(
            scene.score_line(),
            Style::default()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(high_score_text(scene), Style::default().fg(theme.hud_score)),
        Line::from(""),
    ];
    lines.extend(
        scene
            .recent_lines()
            .into_iter()
            .map(|line| Line::styled(line, Style::default().fg(theme.hud_muted))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use crate::config::{GameConfig, THEME_CLASSIC};
    use crate::game::GameState;
    use crate::results::RecentResults;
    use crate::scene::Scene;

    use super::{hud_width, panel_lines};

    #[test]
    fn panel_lists_score_high_score_and_recent_games() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 1);
        state.start("Kim").expect("valid name should start");
        let scene = Scene::capture(&state, &RecentResults::from_scores([2, 4]));

        let text: Vec<String> = panel_lines(&scene, &THEME_CLASSIC)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            text,
            vec![
                "Kim: 000",
                "High 000",
                "",
                "Last Game 1: 2",
                "Last Game 2: 4",
                "Last Game 3: 000",
            ]
        );
    }

    #[test]
    fn long_names_widen_the_panel() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 2);
        state
            .start("AVeryLongPlayerName")
            .expect("valid name should start");
        let scene = Scene::capture(&state, &RecentResults::default());

        assert_eq!(hud_width(&scene), 24);
    }
}
