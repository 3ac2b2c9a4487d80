use dioxus::prelude::*;

use crate::domain::models::mood::{MAX_MOOD_RATING, MIN_MOOD_RATING};
use crate::domain::models::MoodLevel;
use crate::domain::services::ChartPoint;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 256.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 36.0;

#[derive(Debug, Clone, PartialEq)]
struct Dot {
    x: f64,
    y: f64,
    label: String,
    mood: f64,
}

fn x_at(index: usize, count: usize) -> f64 {
    let plot = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    if count <= 1 {
        return MARGIN_LEFT + plot / 2.0;
    }
    MARGIN_LEFT + plot * index as f64 / (count - 1) as f64
}

fn y_at(mood: f64) -> f64 {
    let plot = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let span = (MAX_MOOD_RATING - MIN_MOOD_RATING) as f64;
    MARGIN_TOP + plot * (MAX_MOOD_RATING as f64 - mood) / span
}

/// Polyline paths for runs of consecutive buckets with data; empty buckets
/// break the line.
fn line_paths(points: &[ChartPoint]) -> Vec<String> {
    let mut paths = Vec::new();
    let mut current = String::new();
    for (i, point) in points.iter().enumerate() {
        match point.mood {
            Some(mood) => {
                let cmd = if current.is_empty() { 'M' } else { 'L' };
                current.push_str(&format!("{}{:.1},{:.1} ", cmd, x_at(i, points.len()), y_at(mood)));
            }
            None if !current.is_empty() => paths.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        paths.push(current);
    }
    paths
}

fn dots(points: &[ChartPoint]) -> Vec<Dot> {
    points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            p.mood.map(|mood| Dot {
                x: x_at(i, points.len()),
                y: y_at(mood),
                label: p.label.clone(),
                mood,
            })
        })
        .collect()
}

fn tooltip_text(dot: &Dot) -> String {
    match MoodLevel::from_rating(dot.mood.round() as i32) {
        Some(level) => format!("{}\n{} {}", dot.label, level.emoji(), level.label()),
        None => dot.label.clone(),
    }
}

/// Line chart of mean mood per bucket, emoji ticks on the y axis
#[component]
pub fn MoodChart(points: Vec<ChartPoint>) -> Element {
    let paths = line_paths(&points);
    let dots = dots(&points);
    let count = points.len();

    rsx! {
        svg {
            class: "c-mood-chart",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            preserve_aspect_ratio: "none",
            role: "img",
            "aria-label": "Mood over time",

            for level in MoodLevel::ALL {
                text {
                    key: "{level.rating()}",
                    class: "c-mood-chart__y-tick",
                    x: "{MARGIN_LEFT - 10.0}",
                    y: "{y_at(level.rating() as f64) + 4.0}",
                    text_anchor: "end",
                    "{level.emoji()}"
                }
            }

            for (i, point) in points.iter().enumerate() {
                text {
                    key: "x-{i}",
                    class: "c-mood-chart__x-tick",
                    x: "{x_at(i, count)}",
                    y: "{HEIGHT - 12.0}",
                    text_anchor: "middle",
                    "{point.label}"
                }
            }

            for (i, d) in paths.iter().enumerate() {
                path { key: "line-{i}", class: "c-mood-chart__line", d: "{d}" }
            }

            for (i, dot) in dots.iter().enumerate() {
                circle {
                    key: "dot-{i}",
                    class: "c-mood-chart__dot",
                    cx: "{dot.x}",
                    cy: "{dot.y}",
                    r: "4",
                    title { "{tooltip_text(dot)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_point(label: &str, mood: Option<f64>) -> ChartPoint {
        ChartPoint {
            label: label.to_string(),
            mood,
        }
    }

    #[test]
    fn test_y_axis_extremes() {
        assert_eq!(y_at(5.0), MARGIN_TOP);
        assert_eq!(y_at(1.0), HEIGHT - MARGIN_BOTTOM);
    }

    #[test]
    fn test_gaps_split_the_line() {
        let points = vec![
            make_point("Mon", Some(3.0)),
            make_point("Tue", Some(4.0)),
            make_point("Wed", None),
            make_point("Thu", Some(2.0)),
        ];
        let paths = line_paths(&points);
        assert_eq!(paths.len(), 2);
        assert!(paths[0].starts_with('M'));
        assert!(paths[0].contains('L'));
        assert!(!paths[1].contains('L'));
        assert_eq!(dots(&points).len(), 3);
    }

    #[test]
    fn test_empty_series_has_no_line() {
        let points = vec![make_point("Jan", None), make_point("Feb", None)];
        assert!(line_paths(&points).is_empty());
        assert!(dots(&points).is_empty());
    }

    #[test]
    fn test_tooltip_rounds_average() {
        let dot = Dot {
            x: 0.0,
            y: 0.0,
            label: "Mar".into(),
            mood: 3.6,
        };
        assert_eq!(tooltip_text(&dot), "Mar\n🙂 Happy");
    }
}
