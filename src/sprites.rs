//! Weather icon art with multi-color layer support
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! Each icon category has a Small and a Large variant; multi-layer sprites
//! (cloud + precipitation, sun + cloud) composite several colored layers.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::condition::IconCategory;

// ============================================================================
// Sprite data - embedded at compile time
// File naming: {size}_{color}.txt (e.g., small_yellow.txt, large_gray.txt)
// ============================================================================

macro_rules! sprite {
    ($dir:literal, $file:literal) => {
        include_str!(concat!("../sprites/", $dir, "/", $file, ".txt"))
    };
}

const YELLOW: Color = Color::Yellow;
const CLOUD_GRAY: Color = Color::Rgb(160, 160, 175);
const CLOUD_DARK: Color = Color::Rgb(120, 120, 140);
const CLOUD_LIGHT: Color = Color::Rgb(170, 170, 185);
const FOG_LIGHT: Color = Color::Rgb(180, 180, 190);
const DRIZZLE_BLUE: Color = Color::Rgb(130, 170, 200);
const RAIN_BLUE: Color = Color::Rgb(80, 140, 200);
const SNOW_WHITE: Color = Color::Rgb(200, 220, 255);
const WIND_WHITE: Color = Color::Rgb(215, 225, 235);

/// One colored layer in both sizes: (small, large, color)
type LayerSpec = (&'static str, &'static str, Color);

/// Layers back-to-front for each category (last layer = foreground)
fn layer_specs(category: IconCategory) -> &'static [LayerSpec] {
    match category {
        IconCategory::Clear => &[(
            sprite!("sun", "small_yellow"),
            sprite!("sun", "large_yellow"),
            YELLOW,
        )],
        IconCategory::PartlyCloudy => &[
            (
                sprite!("partly_cloudy", "small_yellow"),
                sprite!("partly_cloudy", "large_yellow"),
                YELLOW,
            ),
            (
                sprite!("partly_cloudy", "small_gray"),
                sprite!("partly_cloudy", "large_gray"),
                Color::Rgb(200, 200, 210),
            ),
        ],
        IconCategory::Cloudy => &[
            (
                sprite!("cloudy", "small_darkgray"),
                sprite!("cloudy", "large_darkgray"),
                CLOUD_DARK,
            ),
            (
                sprite!("cloudy", "small_lightgray"),
                sprite!("cloudy", "large_lightgray"),
                CLOUD_LIGHT,
            ),
        ],
        IconCategory::Fog => &[
            (
                sprite!("fog", "small_darkgray"),
                sprite!("fog", "large_darkgray"),
                Color::Rgb(140, 140, 155),
            ),
            (
                sprite!("fog", "small_lightgray"),
                sprite!("fog", "large_lightgray"),
                FOG_LIGHT,
            ),
        ],
        IconCategory::Drizzle => &[
            (
                sprite!("drizzle", "small_gray"),
                sprite!("drizzle", "large_gray"),
                CLOUD_GRAY,
            ),
            (
                sprite!("drizzle", "small_blue"),
                sprite!("drizzle", "large_blue"),
                DRIZZLE_BLUE,
            ),
        ],
        IconCategory::Rain => &[
            (
                sprite!("sun_shower", "small_yellow"),
                sprite!("sun_shower", "large_yellow"),
                YELLOW,
            ),
            (
                sprite!("sun_shower", "small_gray"),
                sprite!("sun_shower", "large_gray"),
                CLOUD_GRAY,
            ),
            (
                sprite!("sun_shower", "small_blue"),
                sprite!("sun_shower", "large_blue"),
                DRIZZLE_BLUE,
            ),
        ],
        IconCategory::HeavyRain => &[
            (
                sprite!("heavy_rain", "small_gray"),
                sprite!("heavy_rain", "large_gray"),
                CLOUD_DARK,
            ),
            (
                sprite!("heavy_rain", "small_blue"),
                sprite!("heavy_rain", "large_blue"),
                RAIN_BLUE,
            ),
        ],
        IconCategory::Thunder => &[
            (
                sprite!("thunder", "small_gray"),
                sprite!("thunder", "large_gray"),
                CLOUD_DARK,
            ),
            (
                sprite!("thunder", "small_yellow"),
                sprite!("thunder", "large_yellow"),
                YELLOW,
            ),
        ],
        IconCategory::Wind => &[(
            sprite!("wind", "small_white"),
            sprite!("wind", "large_white"),
            WIND_WHITE,
        )],
        IconCategory::Snow => &[
            (
                sprite!("snow", "small_gray"),
                sprite!("snow", "large_gray"),
                CLOUD_GRAY,
            ),
            (
                sprite!("snow", "small_white"),
                sprite!("snow", "large_white"),
                SNOW_WHITE,
            ),
        ],
        IconCategory::Unknown => &[(
            sprite!("unknown", "small_gray"),
            sprite!("unknown", "large_gray"),
            CLOUD_LIGHT,
        )],
    }
}

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);

    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);

        for col_idx in 0..max_width {
            // Topmost non-space character wins
            let (ch, color) = layers
                .iter()
                .zip(&layer_lines)
                .rev()
                .find_map(|(layer, lines)| {
                    lines
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                })
                .unwrap_or((' ', Color::Reset));

            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }

        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Types
// ============================================================================

/// Sprite size categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// Up to 5 lines
    Small,
    /// Up to 9 lines
    Large,
}

impl SpriteSize {
    pub fn height(self) -> u16 {
        match self {
            SpriteSize::Small => 5,
            SpriteSize::Large => 9,
        }
    }

    /// Pick the largest sprite that fits the available height.
    /// Returns `None` if even Small won't fit.
    pub fn for_height(available: u16) -> Option<Self> {
        match available {
            0..=4 => None,
            5..=8 => Some(SpriteSize::Small),
            _ => Some(SpriteSize::Large),
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Get icon art for the given category and size
pub fn get_sprite(category: IconCategory, size: SpriteSize) -> Text<'static> {
    let layers: Vec<SpriteLayer> = layer_specs(category)
        .iter()
        .map(|&(small, large, color)| SpriteLayer {
            content: match size {
                SpriteSize::Small => small,
                SpriteSize::Large => large,
            },
            color,
        })
        .collect();

    composite_layers(&layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_size_for_height() {
        assert_eq!(SpriteSize::for_height(0), None);
        assert_eq!(SpriteSize::for_height(4), None);
        assert_eq!(SpriteSize::for_height(5), Some(SpriteSize::Small));
        assert_eq!(SpriteSize::for_height(8), Some(SpriteSize::Small));
        assert_eq!(SpriteSize::for_height(9), Some(SpriteSize::Large));
        assert_eq!(SpriteSize::for_height(60), Some(SpriteSize::Large));
    }

    #[test]
    fn test_all_sprites_load_within_height() {
        for category in IconCategory::ALL {
            for size in [SpriteSize::Small, SpriteSize::Large] {
                let text = get_sprite(category, size);
                assert!(
                    !text.lines.is_empty(),
                    "Sprite {:?}/{:?} should not be empty",
                    category,
                    size
                );
                assert!(
                    text.lines.len() <= usize::from(size.height()),
                    "Sprite {:?}/{:?} is {} lines",
                    category,
                    size,
                    text.lines.len()
                );
            }
        }
    }

    #[test]
    fn test_foreground_layer_wins() {
        let text = composite_layers(&[
            SpriteLayer {
                content: "ab",
                color: Color::Red,
            },
            SpriteLayer {
                content: " c",
                color: Color::Blue,
            },
        ]);
        let spans = &text.lines[0].spans;
        assert_eq!(spans[0].content, "a");
        assert_eq!(spans[0].style.fg, Some(Color::Red));
        assert_eq!(spans[1].content, "c");
        assert_eq!(spans[1].style.fg, Some(Color::Blue));
    }
}
