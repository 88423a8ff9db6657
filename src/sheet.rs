//! Lays out lyrics with their chord lines for display.

use serde::{Deserialize, Serialize};

/// One rendered line of a hymn sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum SheetLine {
    Chords(String),
    Lyric(String),
}

/// Interleaves chord line `i` above lyric line `i`.
///
/// Blank chord lines produce nothing. Without chords, only lyric lines come
/// back. When one side is longer the remaining lines of that side are emitted
/// on their own.
pub fn layout_sheet(lyrics: &str, chords: Option<&str>) -> Vec<SheetLine> {
    let lyric_lines: Vec<&str> = lyrics.split('\n').collect();
    let Some(chords) = chords else {
        return lyric_lines
            .into_iter()
            .map(|line| SheetLine::Lyric(line.to_string()))
            .collect();
    };

    let chord_lines: Vec<&str> = chords.split('\n').collect();
    let rows = lyric_lines.len().max(chord_lines.len());
    let mut sheet = Vec::with_capacity(rows * 2);

    for i in 0..rows {
        if let Some(chord) = chord_lines.get(i).filter(|line| !line.trim().is_empty()) {
            sheet.push(SheetLine::Chords(chord.to_string()));
        }
        if let Some(lyric) = lyric_lines.get(i) {
            sheet.push(SheetLine::Lyric(lyric.to_string()));
        }
    }
    sheet
}
