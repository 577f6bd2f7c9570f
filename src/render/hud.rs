//! Player stats panel.
//!
//! The panel hangs off the player's position in level space so it scrolls
//! with the camera: `(x + screen_w/2 - 30, y + screen_h - 25)`.

use crate::components::controller::PlayerStats;
use crate::components::mapposition::MapPosition;
use crate::render::{Color, Screen};

/// Panel background.
pub const STATS_BG: Color = Color::Rgb(170, 170, 170);
pub const PANEL_W: i32 = 40;
pub const PANEL_H: i32 = 14;
/// Portrait position inside the panel.
const PORTRAIT_AT: (i32, i32) = (12, 1);

/// One line of the panel, relative to its top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLine {
    pub dx: i32,
    pub dy: i32,
    pub text: String,
    pub fg: Color,
}

fn percent(value: i32, max: i32) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    value as f32 / max as f32 * 100.0
}

/// Text lines of the panel: health, mana, gold, experience.
pub fn stat_lines(stats: &PlayerStats) -> [HudLine; 4] {
    [
        HudLine {
            dx: 1,
            dy: 1,
            text: format!("{:3.0}% health", percent(stats.health, stats.max_health)),
            fg: Color::Red,
        },
        HudLine {
            dx: 27,
            dy: 1,
            text: format!("{:3.0}% mana", percent(stats.mana, stats.max_mana)),
            fg: Color::Blue,
        },
        HudLine {
            dx: 1,
            dy: 12,
            text: format!("{} gold", stats.gold),
            fg: Color::Yellow,
        },
        HudLine {
            dx: 29,
            dy: 12,
            text: format!(
                "{:3.0}% xp",
                percent(stats.experience, stats.experience_to_level)
            ),
            fg: Color::Magenta,
        },
    ]
}

/// Top-left corner of the panel for a player at `pos`.
pub fn panel_origin(screen_size: (i32, i32), pos: MapPosition) -> (i32, i32) {
    let (w, h) = screen_size;
    (pos.x + w / 2 - 30, pos.y + h - 25)
}

pub fn draw_hud(screen: &mut dyn Screen, pos: MapPosition, stats: &PlayerStats) {
    let (x, y) = panel_origin(screen.size(), pos);
    screen.fill_rect(x, y, PANEL_W, PANEL_H, STATS_BG);
    for line in stat_lines(stats) {
        screen.draw_text(x + line.dx, y + line.dy, &line.text, line.fg, STATS_BG);
    }
    screen.draw_image(x + PORTRAIT_AT.0, y + PORTRAIT_AT.1, &stats.portrait);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::components::spell::SpellSpec;
    use crate::render::testing::{DrawCall, RecordingScreen};

    fn stats() -> PlayerStats {
        let frames = ["u", "r", "d", "l"].map(Arc::<str>::from);
        PlayerStats::new(100, 100, SpellSpec::default(), frames, "portrait.png")
    }

    #[test]
    fn full_stats() {
        let lines = stat_lines(&stats());
        assert_eq!(lines[0].text, "100% health");
        assert_eq!(lines[1].text, "100% mana");
        assert_eq!(lines[2].text, "0 gold");
        assert_eq!(lines[3].text, "  0% xp");
    }

    #[test]
    fn percentages_are_rounded_and_padded() {
        let mut s = stats();
        s.health = 55;
        s.mana = 5;
        s.max_mana = 0;
        let lines = stat_lines(&s);
        assert_eq!(lines[0].text, " 55% health");
        assert_eq!(lines[1].text, "  0% mana");
    }

    #[test]
    fn panel_follows_player() {
        let mut screen = RecordingScreen::new(120, 40);
        draw_hud(&mut screen, MapPosition::new(10, 5), &stats());
        assert_eq!(screen.calls[0], DrawCall::Rect(40, 20, PANEL_W, PANEL_H, STATS_BG));
        assert_eq!(
            screen.calls[1],
            DrawCall::Text(41, 21, "100% health".to_string(), Color::Red, STATS_BG)
        );
        assert_eq!(
            screen.calls.last(),
            Some(&DrawCall::Image(52, 21, "portrait.png".to_string()))
        );
    }
}
