//! Hymn records and the shapes used to create and edit them.
//!
//! Field names serialize in camelCase (`isFavorite`, `createdAt`) so the
//! persisted `hymns` payload stays readable by the UI shell without a mapping
//! layer. Optional fields are omitted rather than written as `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DraftError;

/// Category assigned to user-authored hymns when the form leaves it blank.
pub const CUSTOM_CATEGORY: &str = "custom";

/// Keys offered by the hymn form, in chromatic order.
pub const MUSICAL_KEYS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A single catalog entry.
///
/// `id` and `created_at` are fixed when the store materializes the record;
/// every mutation refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hymn {
    pub id: String,
    pub title: String,
    /// Number in the printed hymnal, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    /// Free-form category id such as `harpa-crista`.
    pub category: String,
    /// Musical key, e.g. `G` or `C#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub lyrics: String,
    /// Chord lines, paired by position with the lines of `lyrics`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chords: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    /// `true` for user-authored hymns; only those are editable in the UI.
    #[serde(default)]
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hymn {
    pub(crate) fn from_draft(id: String, draft: HymnDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            number: draft.number,
            category: draft.category,
            key: draft.key,
            lyrics: draft.lyrics,
            chords: draft.chords,
            is_favorite: draft.is_favorite,
            is_custom: draft.is_custom,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the UI may offer edit and delete for this record.
    pub fn is_editable(&self) -> bool {
        self.is_custom
    }

    /// Case-insensitive match against title and lyrics, raw match against the
    /// decimal hymn number.
    pub(crate) fn matches_query(&self, query: &str, lower_query: &str) -> bool {
        self.title.to_lowercase().contains(lower_query)
            || self
                .number
                .is_some_and(|number| number.to_string().contains(query))
            || self.lyrics.to_lowercase().contains(lower_query)
    }
}

/// Everything needed to create a hymn; the store assigns id and timestamps.
///
/// The store accepts drafts as given. Use [`HymnForm::validate`] to build one
/// from raw user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HymnDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub lyrics: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chords: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_custom: bool,
}

/// Partial update for an existing hymn.
///
/// Absent fields are left alone. For the optional fields, `Some(None)`
/// (`null` in JSON) clears the value. Identity and creation time are not part
/// of the patch and can never be overwritten through it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HymnPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub key: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub chords: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
}

impl HymnPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, hymn: &mut Hymn) {
        if let Some(title) = self.title {
            hymn.title = title;
        }
        if let Some(number) = self.number {
            hymn.number = number;
        }
        if let Some(category) = self.category {
            hymn.category = category;
        }
        if let Some(key) = self.key {
            hymn.key = key;
        }
        if let Some(lyrics) = self.lyrics {
            hymn.lyrics = lyrics;
        }
        if let Some(chords) = self.chords {
            hymn.chords = chords;
        }
        if let Some(is_favorite) = self.is_favorite {
            hymn.is_favorite = is_favorite;
        }
        if let Some(is_custom) = self.is_custom {
            hymn.is_custom = is_custom;
        }
    }
}

impl From<HymnDraft> for HymnPatch {
    /// A patch that overwrites every editable field, clearing optional ones
    /// the draft leaves empty. This is what saving the edit form does.
    fn from(draft: HymnDraft) -> Self {
        Self {
            title: Some(draft.title),
            number: Some(draft.number),
            category: Some(draft.category),
            key: Some(draft.key),
            lyrics: Some(draft.lyrics),
            chords: Some(draft.chords),
            is_favorite: Some(draft.is_favorite),
            is_custom: Some(draft.is_custom),
        }
    }
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Raw text as typed into the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HymnForm {
    pub title: String,
    pub number: String,
    pub category: String,
    pub key: String,
    pub lyrics: String,
    pub chords: String,
    /// Favorite flag of the hymn being edited, carried through unchanged.
    pub is_favorite: bool,
}

impl HymnForm {
    /// Turns form input into a draft for a user-authored hymn.
    ///
    /// Title and lyrics are trimmed and required. Key and chords are trimmed
    /// and dropped when empty. A non-empty number must parse as an integer.
    pub fn validate(&self) -> Result<HymnDraft, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let lyrics = self.lyrics.trim();
        if lyrics.is_empty() {
            return Err(DraftError::MissingLyrics);
        }

        let number = match self.number.trim() {
            "" => None,
            raw => Some(
                raw.parse::<i64>()
                    .map_err(|_| DraftError::InvalidNumber(raw.to_string()))?,
            ),
        };

        let category = match self.category.trim() {
            "" => CUSTOM_CATEGORY.to_string(),
            category => category.to_string(),
        };

        Ok(HymnDraft {
            title: title.to_string(),
            number,
            category,
            key: non_empty(&self.key),
            lyrics: lyrics.to_string(),
            chords: non_empty(&self.chords),
            is_favorite: self.is_favorite,
            is_custom: true,
        })
    }
}

impl From<&Hymn> for HymnForm {
    /// Pre-fills the edit form from an existing record.
    fn from(hymn: &Hymn) -> Self {
        Self {
            title: hymn.title.clone(),
            number: hymn.number.map(|n| n.to_string()).unwrap_or_default(),
            category: hymn.category.clone(),
            key: hymn.key.clone().unwrap_or_default(),
            lyrics: hymn.lyrics.clone(),
            chords: hymn.chords.clone().unwrap_or_default(),
            is_favorite: hymn.is_favorite,
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
