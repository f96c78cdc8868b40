//! Swamp map widget
//!
//! Draws the Rotfield map directly into the buffer: the five location
//! markers, the boardwalk paths between them, and a little standing water.
//! Geometry is expressed on a nominal 800x600 canvas and scaled to whatever
//! area the layout hands us.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use rotfield_core::{LocationId, Theme, VERSION};

use crate::ui::theme::SwampTheme;

/// Widget rendering the swamp map
pub struct MapWidget<'a> {
    active: LocationId,
    necro: bool,
    theme: &'a SwampTheme,
}

/// One drawable marker on the map, anchored at a map-canvas coordinate.
struct Marker {
    location: LocationId,
    theme: Theme,
    center: (f64, f64),
    sprite: &'static [&'static str],
    label: &'static str,
}

const MARKERS: &[Marker] = &[
    Marker {
        location: LocationId::Shacks,
        theme: Theme::Indigo,
        center: (250.0, 220.0),
        sprite: &["  /\\_ ", " /   \\", " |_[]|"],
        label: "Shack",
    },
    Marker {
        location: LocationId::Shacks,
        theme: Theme::Indigo,
        center: (400.0, 150.0),
        sprite: &[" _/\\__ ", "/     \\", "|[] __|"],
        label: "Shack",
    },
    Marker {
        location: LocationId::BonePiles,
        theme: Theme::Rose,
        center: (170.0, 480.0),
        sprite: &["  , x ,", " )(x)( ", "xX)(Xx "],
        label: "Bone Pile",
    },
    Marker {
        location: LocationId::Gardens,
        theme: Theme::Emerald,
        center: (650.0, 480.0),
        sprite: &["+~~~~~~+", "| * . ,|", "+~~~~~~+"],
        label: "Garden Plot",
    },
    Marker {
        location: LocationId::BulletinBoards,
        theme: Theme::Amber,
        center: (650.0, 170.0),
        sprite: &["+-====-+", "|== =  |", "+------+"],
        label: "Bulletin Board",
    },
];

/// Boardwalk polylines, in map-canvas coordinates.
const BOARDWALKS: &[&[(f64, f64)]] = &[
    // Central boardwalk
    &[
        (400.0, 600.0),
        (400.0, 350.0),
        (450.0, 300.0),
        (500.0, 200.0),
        (400.0, 150.0),
    ],
    // Branch to the near shack
    &[(400.0, 350.0), (300.0, 250.0), (250.0, 220.0)],
    // Branch to the bone pile
    &[(400.0, 350.0), (200.0, 450.0), (120.0, 520.0)],
    // Branch to the garden
    &[(450.0, 300.0), (550.0, 350.0), (650.0, 480.0)],
    // Branch to the bulletin board
    &[(500.0, 200.0), (600.0, 180.0), (650.0, 170.0)],
];

/// Where ripples sit in the open water.
const RIPPLES: &[(f64, f64)] = &[(300.0, 400.0), (600.0, 300.0), (450.0, 500.0)];

impl<'a> MapWidget<'a> {
    pub fn new(active: LocationId, theme: &'a SwampTheme) -> Self {
        Self {
            active,
            necro: false,
            theme,
        }
    }

    pub fn necro(mut self, necro: bool) -> Self {
        self.necro = necro;
        self
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Rotfield ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 20 || inner.height < 10 {
            return;
        }

        let mut canvas = MapCanvas { inner, buf };

        // Water first, boardwalks over it, markers on top
        let water_style = Style::default()
            .fg(self.theme.water)
            .add_modifier(Modifier::DIM);
        for &(x, y) in RIPPLES {
            canvas.put_text(x, y, "( )", water_style);
        }

        let walk_style = if self.active == LocationId::Boardwalks {
            Style::default()
                .fg(self.theme.accent(Theme::Green, self.necro))
                .add_modifier(Modifier::BOLD)
        } else if self.necro {
            Style::default().fg(self.theme.necro_dim)
        } else {
            self.theme.muted_style()
        };
        for walk in BOARDWALKS {
            canvas.polyline(walk, '·', walk_style);
        }

        for marker in MARKERS {
            let active = marker.location == self.active;
            let style = if active {
                Style::default()
                    .fg(self.theme.accent(marker.theme, self.necro))
                    .add_modifier(Modifier::BOLD)
            } else if self.necro {
                Style::default().fg(self.theme.necro_dim)
            } else {
                Style::default().fg(self.theme.muted)
            };
            canvas.sprite(marker.center, marker.sprite, style);

            let label_style = if active {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };
            let label_y = marker.center.1 + 55.0;
            canvas.put_text_centered(marker.center.0, label_y, marker.label, label_style);
        }

        // Title block, matching the map's own signage
        let title_style = if self.necro {
            Style::default().fg(self.theme.necro)
        } else {
            Style::default()
                .fg(self.theme.title_float)
                .add_modifier(Modifier::BOLD)
        };
        canvas.put_text_centered(400.0, 35.0, "R O T F I E L D", title_style);
        canvas.put_text_centered(
            400.0,
            75.0,
            "Gardens of Shacks",
            Style::default().fg(self.theme.title_rot),
        );
        canvas.put_text_centered(
            400.0,
            580.0,
            &format!("v{VERSION}"),
            self.theme.muted_style(),
        );
    }
}

/// Scaled drawing surface over the widget's inner area.
struct MapCanvas<'a> {
    inner: Rect,
    buf: &'a mut Buffer,
}

impl MapCanvas<'_> {
    /// Map-canvas (800x600) coordinates to a buffer cell.
    fn cell(&self, x: f64, y: f64) -> (i32, i32) {
        let col = self.inner.x as f64 + x / 800.0 * (self.inner.width.saturating_sub(1)) as f64;
        let row = self.inner.y as f64 + y / 600.0 * (self.inner.height.saturating_sub(1)) as f64;
        (col.round() as i32, row.round() as i32)
    }

    fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= self.inner.x as i32
            && col < (self.inner.x + self.inner.width) as i32
            && row >= self.inner.y as i32
            && row < (self.inner.y + self.inner.height) as i32
    }

    fn plot(&mut self, col: i32, row: i32, ch: char, style: Style) {
        if self.in_bounds(col, row) {
            self.buf[(col as u16, row as u16)].set_char(ch).set_style(style);
        }
    }

    /// Write text with its first character at the given map coordinate.
    fn put_text(&mut self, x: f64, y: f64, text: &str, style: Style) {
        let (col, row) = self.cell(x, y);
        for (i, ch) in text.chars().enumerate() {
            self.plot(col + i as i32, row, ch, style);
        }
    }

    /// Write text centered on the given map coordinate.
    fn put_text_centered(&mut self, x: f64, y: f64, text: &str, style: Style) {
        let (col, row) = self.cell(x, y);
        let start = col - (text.chars().count() as i32) / 2;
        for (i, ch) in text.chars().enumerate() {
            self.plot(start + i as i32, row, ch, style);
        }
    }

    /// Draw a multi-line sprite centered on the given map coordinate.
    fn sprite(&mut self, center: (f64, f64), rows: &[&str], style: Style) {
        let (col, row) = self.cell(center.0, center.1);
        let top = row - (rows.len() as i32) / 2;
        for (dy, sprite_row) in rows.iter().enumerate() {
            let start = col - (sprite_row.chars().count() as i32) / 2;
            for (dx, ch) in sprite_row.chars().enumerate() {
                if ch != ' ' {
                    self.plot(start + dx as i32, top + dy as i32, ch, style);
                }
            }
        }
    }

    /// Draw a dotted polyline through map-canvas points.
    fn polyline(&mut self, points: &[(f64, f64)], ch: char, style: Style) {
        for pair in points.windows(2) {
            let (x0, y0) = self.cell(pair[0].0, pair[0].1);
            let (x1, y1) = self.cell(pair[1].0, pair[1].1);

            let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
            for step in 0..=steps {
                let t = step as f64 / steps as f64;
                let col = x0 as f64 + (x1 - x0) as f64 * t;
                let row = y0 as f64 + (y1 - y0) as f64 * t;
                // Dashed planks: skip every third cell
                if step % 3 != 2 {
                    self.plot(col.round() as i32, row.round() as i32, ch, style);
                }
            }
        }
    }
}
