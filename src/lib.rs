//! # Hymnal Core
//!
//! Local storage and catalog logic for a hymn, lyrics and chords app. The UI
//! shell (web view, Flutter, native) renders; this crate owns the data.
//! Records are kept in LMDB and exposed through C-compatible functions that
//! speak JSON.
//!
//! ## Features
//!
//! - **LMDB-based storage**: every mutation is committed before the call returns
//! - **Single source of truth**: favorites are derived from the hymn records
//! - **Total operations**: unknown ids are reported, never half-applied
//! - **Safe error handling**: no `unwrap()` calls in production code
//!
//! ## Quick Start
//!
//! ```no_run
//! use hymnal_core::{create_hymnal, search_hymns, toggle_favorite};
//! use std::ffi::CString;
//!
//! let db_name = CString::new("my_hymnal").unwrap();
//! let state = create_hymnal(db_name.as_ptr());
//!
//! let id = CString::new("1").unwrap();
//! let toggled = toggle_favorite(state, id.as_ptr());
//!
//! let query = CString::new("grande").unwrap();
//! let results = search_hymns(state, query.as_ptr());
//! ```
//!
//! The same operations are available in Rust through [`HymnalState`].
//!
//! ## FFI Functions
//!
//! - [`create_hymnal`] / [`create_hymnal_with_config`] - Open a catalog
//! - [`get_all_hymns`], [`get_hymn_by_id`] - Read records
//! - [`add_hymn`], [`update_hymn`], [`delete_hymn`], [`toggle_favorite`] - Mutate records
//! - [`get_hymns_by_category`], [`get_favorite_hymns`], [`search_hymns`],
//!   [`get_recent_hymns`], [`get_category_summaries`] - Derived views
//! - [`get_hymn_sheet`], [`validate_hymn_form`] - Presentation helpers
//! - [`get_settings`], [`set_theme`], [`toggle_theme`], [`set_font_size`],
//!   [`get_font_size_class`] - Display preferences
//! - [`reset_hymnal`], [`close_hymnal`], [`destroy_hymnal`], [`free_response`] - Lifecycle

pub mod app_state;
pub mod category;
pub mod config;
pub mod error;
pub mod hymn;
pub mod hymn_store;
pub mod local_db_state;
pub mod persisted;
pub mod seed;
pub mod settings;
pub mod settings_store;
pub mod sheet;
pub mod storage;
mod app_response;

pub use crate::app_response::AppResponse;
pub use crate::app_state::HymnalState;
pub use crate::config::CoreConfig;
pub use crate::hymn::{Hymn, HymnDraft, HymnForm, HymnPatch};
pub use crate::settings::{AppSettings, FontSize, Theme};

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};
use serde::Serialize;

use crate::sheet::layout_sheet;

/// Opens (or creates) the catalog stored in `<name>.lmdb`.
///
/// An empty catalog starts with the built-in sample hymns.
///
/// # Parameters
///
/// * `name` - A null-terminated C string containing the database name
///
/// # Returns
///
/// Returns a pointer to the [`HymnalState`] on success, or a null pointer on failure.
/// Release it with [`destroy_hymnal`].
///
/// # Safety
///
/// `name` must be null or a valid pointer to a null-terminated C string.
/// The returned pointer is owned by the caller and must be released with
/// [`destroy_hymnal`].
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use hymnal_core::create_hymnal;
///
/// let name = CString::new("hymnal").unwrap();
/// let state = create_hymnal(name.as_ptr());
///
/// if !state.is_null() {
///     // Catalog ready
/// }
/// ```
///
/// # Errors
///
/// Returns null pointer if:
/// - Input name pointer is null
/// - Input string contains invalid UTF-8
/// - The LMDB environment cannot be opened
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_hymnal(name: *const c_char) -> *mut HymnalState {
    if name.is_null() {
        warn!("Null name pointer passed to create_hymnal");
        return std::ptr::null_mut();
    }

    let name_str = match unsafe { CStr::from_ptr(name).to_str() } {
        Ok(s) => s,
        Err(e) => {
            warn!("Invalid UTF-8 in name parameter: {e}");
            return std::ptr::null_mut();
        }
    };

    open_state(&CoreConfig::named(name_str))
}

/// Opens a catalog from a JSON [`CoreConfig`] document.
///
/// Missing fields take their defaults, so `{"db_path":"hymnal"}` is enough.
/// Returns a null pointer on a null pointer, invalid UTF-8, malformed JSON, or
/// when LMDB refuses to open.
///
/// # Safety
///
/// `config_json` must be null or a valid pointer to a null-terminated C string.
/// The returned pointer must be released with [`destroy_hymnal`].
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_hymnal_with_config(config_json: *const c_char) -> *mut HymnalState {
    if config_json.is_null() {
        warn!("Null config pointer passed to create_hymnal_with_config");
        return std::ptr::null_mut();
    }

    let json = match unsafe { CStr::from_ptr(config_json).to_str() } {
        Ok(s) => s,
        Err(e) => {
            warn!("Invalid UTF-8 in config parameter: {e}");
            return std::ptr::null_mut();
        }
    };

    match CoreConfig::from_json(json) {
        Ok(config) => open_state(&config),
        Err(e) => {
            warn!("Invalid config JSON: {e}");
            std::ptr::null_mut()
        }
    }
}

fn open_state(config: &CoreConfig) -> *mut HymnalState {
    info!("Attempting to open hymnal at: {}", config.lmdb_dir());

    match HymnalState::open(config) {
        Ok(state) => {
            info!("✅ Hymnal initialized successfully");
            Box::into_raw(Box::new(state))
        }
        Err(e) => {
            warn!("❌ Failed to initialize hymnal: {e}");
            warn!("Attempted path: {}", config.lmdb_dir());
            std::ptr::null_mut()
        }
    }
}

/// Returns every hymn, in insertion order, as a JSON array.
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_all_hymns(state: *mut HymnalState) -> *const c_char {
    let state = match state_mut(state, "get_all_hymns") {
        Ok(s) => s,
        Err(err) => return err,
    };

    json_response(state.hymns.hymns())
}

/// Retrieves a hymn by id.
///
/// # Returns
///
/// `Ok` with the hymn JSON, or `NotFound` when no hymn has that id.
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_hymn_by_id(state: *mut HymnalState, id: *const c_char) -> *const c_char {
    let state = match state_mut(state, "get_hymn_by_id") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match state.hymns.get(&id_str) {
        Some(hymn) => json_response(hymn),
        None => not_found(&id_str),
    }
}

/// Creates a hymn from a JSON [`HymnDraft`].
///
/// The store assigns the id and both timestamps and appends the record to the
/// end of the collection. The draft is stored as given; run
/// [`validate_hymn_form`] first when the input comes from a form.
///
/// # Parameters
///
/// * `state` - Pointer to the catalog
/// * `draft_json` - Null-terminated C string containing the draft
///
/// # Returns
///
/// `Ok` with the created hymn as JSON.
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use hymnal_core::{create_hymnal, add_hymn};
///
/// let name = CString::new("hymnal").unwrap();
/// let state = create_hymnal(name.as_ptr());
///
/// let draft = CString::new(r#"{"title":"Castelo Forte","category":"custom","lyrics":"Castelo forte é nosso Deus","isCustom":true}"#).unwrap();
/// let result = add_hymn(state, draft.as_ptr());
/// ```
///
/// # JSON Format
///
/// ```json
/// {
///   "title": "Castelo Forte",
///   "number": 581,
///   "category": "harpa-crista",
///   "key": "D",
///   "lyrics": "...",
///   "chords": "...",
///   "isFavorite": false,
///   "isCustom": true
/// }
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn add_hymn(state: *mut HymnalState, draft_json: *const c_char) -> *const c_char {
    let state = match state_mut(state, "add_hymn") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let json_str = match c_ptr_to_string(draft_json, "JSON") {
        Ok(json) => json,
        Err(err) => return err,
    };

    let draft: HymnDraft = match serde_json::from_str(&json_str) {
        Ok(d) => d,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.hymns.add(draft) {
        Ok(hymn) => json_response(&hymn),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Applies a JSON [`HymnPatch`] to the hymn with `id`.
///
/// Fields absent from the patch are kept; `null` clears `number`, `key` or
/// `chords`. `id` and `createdAt` in the payload are ignored. `updatedAt` is
/// always refreshed.
///
/// # Returns
///
/// `Ok` with the updated hymn, or `NotFound` (nothing changed, nothing written).
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn update_hymn(
    state: *mut HymnalState,
    id: *const c_char,
    patch_json: *const c_char,
) -> *const c_char {
    let state = match state_mut(state, "update_hymn") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(err) => return err,
    };

    let json_str = match c_ptr_to_string(patch_json, "JSON") {
        Ok(json) => json,
        Err(err) => return err,
    };

    let patch: HymnPatch = match serde_json::from_str(&json_str) {
        Ok(p) => p,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Error deserializing JSON: {e:?}"));
            return response_to_c_string(&error);
        }
    };

    match state.hymns.update(&id_str, patch) {
        Ok(Some(hymn)) => json_response(&hymn),
        Ok(None) => not_found(&id_str),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Permanently removes a hymn. It disappears from favorites along with it.
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn delete_hymn(state: *mut HymnalState, id: *const c_char) -> *const c_char {
    let state = match state_mut(state, "delete_hymn") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(err) => return err,
    };

    match state.hymns.delete(&id_str) {
        Ok(true) => response_to_c_string(&AppResponse::success("Hymn deleted successfully")),
        Ok(false) => not_found(&id_str),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Flips the favorite flag of a hymn.
///
/// # Returns
///
/// `Ok` with the new flag as a JSON boolean (`"true"` / `"false"`), or
/// `NotFound`.
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn toggle_favorite(state: *mut HymnalState, id: *const c_char) -> *const c_char {
    let state = match state_mut(state, "toggle_favorite") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(err) => return err,
    };

    match state.hymns.toggle_favorite(&id_str) {
        Ok(Some(is_favorite)) => json_response(&is_favorite),
        Ok(None) => not_found(&id_str),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Hymns whose category equals `category` exactly (case-sensitive).
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_hymns_by_category(
    state: *mut HymnalState,
    category: *const c_char,
) -> *const c_char {
    let state = match state_mut(state, "get_hymns_by_category") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let category = match c_ptr_to_string(category, "category") {
        Ok(c) => c,
        Err(err) => return err,
    };

    json_response(&state.hymns.filter_by_category(&category))
}

/// Hymns flagged as favorite, in collection order.
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_favorite_hymns(state: *mut HymnalState) -> *const c_char {
    let state = match state_mut(state, "get_favorite_hymns") {
        Ok(s) => s,
        Err(err) => return err,
    };

    json_response(&state.hymns.favorites())
}

/// Searches title, number and lyrics.
///
/// A blank query returns an empty array.
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use hymnal_core::{create_hymnal, search_hymns};
///
/// let name = CString::new("hymnal").unwrap();
/// let state = create_hymnal(name.as_ptr());
///
/// let query = CString::new("43").unwrap();
/// let matches = search_hymns(state, query.as_ptr());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn search_hymns(state: *mut HymnalState, query: *const c_char) -> *const c_char {
    let state = match state_mut(state, "search_hymns") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let query = match c_ptr_to_string(query, "query") {
        Ok(q) => q,
        Err(err) => return err,
    };

    json_response(&state.hymns.search(&query))
}

/// The `limit` most recently added hymns, newest first.
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_recent_hymns(state: *mut HymnalState, limit: u32) -> *const c_char {
    let state = match state_mut(state, "get_recent_hymns") {
        Ok(s) => s,
        Err(err) => return err,
    };

    json_response(&state.hymns.recent(limit as usize))
}

/// Per-category counts plus the favorites pseudo-category.
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_category_summaries(state: *mut HymnalState) -> *const c_char {
    let state = match state_mut(state, "get_category_summaries") {
        Ok(s) => s,
        Err(err) => return err,
    };

    json_response(&state.hymns.categories())
}

/// Lays out a hymn for display as `[{"kind":"chords"|"lyric","text":...}]`.
///
/// With `show_chords` false, or when the hymn has no chords, only lyric lines
/// are returned.
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_hymn_sheet(
    state: *mut HymnalState,
    id: *const c_char,
    show_chords: bool,
) -> *const c_char {
    let state = match state_mut(state, "get_hymn_sheet") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(err) => return err,
    };

    match state.hymns.get(&id_str) {
        Some(hymn) => {
            let chords = if show_chords { hymn.chords.as_deref() } else { None };
            json_response(&layout_sheet(&hymn.lyrics, chords))
        }
        None => not_found(&id_str),
    }
}

/// Validates raw form input and returns the resulting draft.
///
/// This needs no catalog. The returned draft can be passed to [`add_hymn`],
/// or to [`update_hymn`] as a full patch.
///
/// # Returns
///
/// `Ok` with the draft JSON, or `ValidationError` naming the first problem
/// (missing title, missing lyrics, non-integer number).
///
/// # Safety
///
/// `form_json` must be null or a valid pointer to a null-terminated C string.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn validate_hymn_form(form_json: *const c_char) -> *const c_char {
    let json_str = match c_ptr_to_string(form_json, "JSON") {
        Ok(json) => json,
        Err(err) => return err,
    };

    let form: HymnForm = match serde_json::from_str(&json_str) {
        Ok(f) => f,
        Err(e) => return response_to_c_string(&AppResponse::from(e)),
    };

    match form.validate() {
        Ok(draft) => json_response(&draft),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// The current `{"theme","fontSize"}` record.
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_settings(state: *mut HymnalState) -> *const c_char {
    let state = match state_mut(state, "get_settings") {
        Ok(s) => s,
        Err(err) => return err,
    };

    json_response(&state.settings.settings())
}

/// Sets the theme (`light` or `dark`) and returns the full settings record.
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn set_theme(state: *mut HymnalState, theme: *const c_char) -> *const c_char {
    let state = match state_mut(state, "set_theme") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let theme = match c_ptr_to_string(theme, "theme") {
        Ok(t) => t,
        Err(err) => return err,
    };

    let theme: Theme = match theme.parse() {
        Ok(t) => t,
        Err(e) => return response_to_c_string(&AppResponse::ValidationError(format!("Theme: {e}"))),
    };

    match state.settings.set_theme(theme) {
        Ok(()) => json_response(&state.settings.settings()),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Flips between light and dark and returns the full settings record.
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn toggle_theme(state: *mut HymnalState) -> *const c_char {
    let state = match state_mut(state, "toggle_theme") {
        Ok(s) => s,
        Err(err) => return err,
    };

    match state.settings.toggle_theme() {
        Ok(_) => json_response(&state.settings.settings()),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Sets the font size (`small`, `medium`, `large`, `extra-large`) and returns
/// the full settings record.
///
/// # Safety
///
/// All parameters must be valid pointers. String parameters must be
/// null-terminated and valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn set_font_size(state: *mut HymnalState, size: *const c_char) -> *const c_char {
    let state = match state_mut(state, "set_font_size") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let size = match c_ptr_to_string(size, "font size") {
        Ok(s) => s,
        Err(err) => return err,
    };

    let size: FontSize = match size.parse() {
        Ok(s) => s,
        Err(e) => {
            return response_to_c_string(&AppResponse::ValidationError(format!("Font size: {e}")))
        }
    };

    match state.settings.set_font_size(size) {
        Ok(()) => json_response(&state.settings.settings()),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Display-scale token for the current font size, e.g. `"text-lg"`.
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_font_size_class(state: *mut HymnalState) -> *const c_char {
    let state = match state_mut(state, "get_font_size_class") {
        Ok(s) => s,
        Err(err) => return err,
    };

    response_to_c_string(&AppResponse::success(state.settings.font_size_class()))
}

/// Deletes all persisted data; hymns and settings return to their defaults.
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn reset_hymnal(state: *mut HymnalState) -> *const c_char {
    let state = match state_mut(state, "reset_hymnal") {
        Ok(s) => s,
        Err(err) => return err,
    };

    match state.reset() {
        Ok(()) => response_to_c_string(&AppResponse::success("Hymnal was reset successfully")),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Closes the LMDB environment.
///
/// Reads keep serving the last loaded snapshot; mutations fail with
/// `BadRequest` afterwards. The state pointer itself must still be released
/// with [`destroy_hymnal`].
///
/// # Safety
///
/// The state parameter must be a valid pointer to a [`HymnalState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_hymnal(state: *mut HymnalState) -> *const c_char {
    let state = match state_mut(state, "close_hymnal") {
        Ok(s) => s,
        Err(err) => return err,
    };

    match state.close() {
        Ok(()) => response_to_c_string(&AppResponse::success(
            "Database connection closed successfully",
        )),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Closes and frees a state returned by [`create_hymnal`]. Null is ignored.
///
/// # Safety
///
/// `state` must be null or a pointer returned by [`create_hymnal`] that has not
/// been destroyed yet. It must not be used afterwards.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn destroy_hymnal(state: *mut HymnalState) {
    if state.is_null() {
        return;
    }
    let state = unsafe { Box::from_raw(state) };
    if let Err(e) = state.close() {
        warn!("Error closing hymnal during destroy: {e}");
    }
}

/// Frees a response string returned by any function in this crate.
///
/// # Safety
///
/// `ptr` must be null or a string returned by this crate that has not been
/// freed yet.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr as *mut c_char));
    }
}

/// Converts an [`AppResponse`] to a C string owned by the caller.
///
/// Returns a null pointer if serialization or C string creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Wraps `value` as JSON in an `Ok` response.
fn json_response<T: Serialize + ?Sized>(value: &T) -> *const c_char {
    match serde_json::to_string(value) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Failed to serialize result: {e}"));
            response_to_c_string(&error)
        }
    }
}

fn not_found(id: &str) -> *const c_char {
    response_to_c_string(&AppResponse::NotFound(format!("No hymn found with id: {id}")))
}

/// Borrows the state behind `ptr`, or builds the `BadRequest` response to
/// return when it is null.
fn state_mut<'a>(
    ptr: *mut HymnalState,
    fn_name: &str,
) -> Result<&'a mut HymnalState, *const c_char> {
    match unsafe { ptr.as_mut() } {
        Some(state) => Ok(state),
        None => {
            let error = AppResponse::BadRequest(format!("Null state pointer passed to {fn_name}"));
            Err(response_to_c_string(&error))
        }
    }
}

/// Converts a C string pointer to a Rust String.
///
/// # Returns
///
/// * `Ok(String)` - If conversion was successful
/// * `Err(*const c_char)` - Error response in C format for null pointers or invalid UTF-8
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
