//! Top-level engine: gestures, selection, note editing, optimistic creates.
//!
//! `EngineCore` is a reducer over UI events. Handlers mutate local state
//! immediately (optimistic) and return [`Action`]s describing the
//! persistence the host must perform; the engine itself never touches the
//! network or the DOM, which keeps every transition natively testable.
//!
//! Persistence policy: positions are persisted once per drag (on pointer-up,
//! not per move frame); note text on commit; creates resolve through the
//! placeholder-id swap in [`crate::item`]; failures roll the optimistic
//! state back. Actions that name a [`ItemId::Pending`] id cannot be applied
//! remotely — the host skips them, accepting last-write-wins drift.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::camera::{Camera, Point, RecenterAnimation};
use crate::consts::DRAG_CLICK_THRESHOLD_PX;
use crate::hit::hit_test;
use crate::input::{InputState, NoteKey, WheelDelta, note_key};
use crate::item::{Collection, Item, ItemId, ItemKind, ItemStore};
use crate::upload::{Finish, PendingSet};

/// Persistence work the host must perform after a handler runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Write an item's final position (emitted once per drag, on release).
    PersistMove { collection: Collection, id: ItemId, x: f64, y: f64 },
    /// Create a note record; the host resolves the placeholder id via
    /// [`EngineCore::commit_note_create`] / [`EngineCore::fail_note_create`].
    CreateNote { temp_id: ItemId, x: f64, y: f64, z_index: i64, text: String },
    /// Update a committed note's text.
    UpdateNoteText { id: ItemId, text: String },
    /// Delete a backend record. The id is always committed.
    DeleteRecord { collection: Collection, id: ItemId },
    /// Toggle audio playback for a clicked audio file.
    ToggleAudio { id: ItemId },
    /// Stop any running audio playback (background click).
    StopAudio,
    /// The pan offset settled; mirror it into the page fragment.
    PanChanged,
}

/// An open note editor: the draft being typed and the pre-edit text that
/// Escape restores.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub id: ItemId,
    pub draft: String,
    original: String,
}

/// Core view-model state for the board.
pub struct EngineCore {
    pub store: ItemStore,
    pub camera: Camera,
    pub input: InputState,
    pub selected: Option<ItemId>,
    pub editing: Option<EditSession>,
    recenter: Option<RecenterAnimation>,
    pending: PendingSet,
    /// Text committed to a note whose create is still in flight; flushed as
    /// an update once the create resolves.
    queued_note_text: HashMap<Uuid, String>,
    add_at: Option<Point>,
    suppress_click: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            store: ItemStore::new(),
            camera: Camera::default(),
            input: InputState::Idle,
            selected: None,
            editing: None,
            recenter: None,
            pending: PendingSet::new(),
            queued_note_text: HashMap::new(),
            add_at: None,
            suppress_click: false,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the store from the initial backend load.
    pub fn load_snapshot(&mut self, items: Vec<Item>) {
        self.store.load_snapshot(items);
    }

    /// Seed the pan offset (from the page fragment) before first render.
    pub fn seed_pan(&mut self, x: f64, y: f64) {
        self.camera.pan_x = x;
        self.camera.pan_y = y;
    }

    // --- Pointer gestures ---

    /// Pointer-down in screen coordinates. Begins an item drag (bumping the
    /// item to the front) or, over empty background, a pan. While the
    /// recenter animation runs, background presses do not start a pan.
    pub fn pointer_down(&mut self, screen: Point) {
        self.add_at = None;
        let world = self.camera.screen_to_world(screen);
        if let Some(id) = hit_test(world, &self.store) {
            self.store.bring_to_front(&id);
            self.input = InputState::DraggingItem { id, last_screen: screen, moved_px: 0.0 };
        } else if self.recenter.is_none() {
            self.input = InputState::Panning { last_screen: screen, moved_px: 0.0 };
        }
    }

    /// Pointer-move in screen coordinates. Pans the camera or moves the
    /// dragged item by the screen delta (converted to world units, so drags
    /// are invariant to the current zoom).
    pub fn pointer_move(&mut self, screen: Point) {
        match &mut self.input {
            InputState::Idle => {}
            InputState::Panning { last_screen, moved_px } => {
                let dx = screen.x - last_screen.x;
                let dy = screen.y - last_screen.y;
                *moved_px += dx.hypot(dy);
                *last_screen = screen;
                self.camera.pan_by(dx, dy);
            }
            InputState::DraggingItem { id, last_screen, moved_px } => {
                let dx = screen.x - last_screen.x;
                let dy = screen.y - last_screen.y;
                *moved_px += dx.hypot(dy);
                *last_screen = screen;
                let zoom = self.camera.zoom;
                if let Some(item) = self.store.get_mut(id) {
                    item.x += dx / zoom;
                    item.y += dy / zoom;
                }
            }
        }
    }

    /// Pointer-up (or leave). Ends the gesture; a drag that actually moved
    /// persists the item's final position exactly once, and any gesture past
    /// the click threshold suppresses the click that follows.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        match std::mem::take(&mut self.input) {
            InputState::Idle => {}
            InputState::Panning { moved_px, .. } => {
                if moved_px > 0.0 {
                    actions.push(Action::PanChanged);
                }
                if moved_px > DRAG_CLICK_THRESHOLD_PX {
                    self.suppress_click = true;
                }
            }
            InputState::DraggingItem { id, moved_px, .. } => {
                if moved_px > DRAG_CLICK_THRESHOLD_PX {
                    self.suppress_click = true;
                }
                if moved_px > 0.0
                    && let Some(item) = self.store.get(&id)
                {
                    actions.push(Action::PersistMove {
                        collection: item.kind.collection(),
                        id: id.clone(),
                        x: item.x,
                        y: item.y,
                    });
                }
            }
        }
        actions
    }

    /// Click in screen coordinates, fired after `pointer_up`. A click that
    /// ends a real drag is swallowed; a genuine click selects the item under
    /// the pointer (toggling audio, or opening the editor on an
    /// already-selected note), or on background deselects, stops playback,
    /// and arms the add-note affordance at the clicked point.
    pub fn click(&mut self, screen: Point) -> Vec<Action> {
        if self.suppress_click {
            self.suppress_click = false;
            return Vec::new();
        }

        let mut actions = Vec::new();
        let world = self.camera.screen_to_world(screen);
        match hit_test(world, &self.store) {
            Some(id) => {
                if self.editing.as_ref().is_some_and(|s| s.id != id) {
                    actions.extend(self.commit_edit());
                }
                let was_selected = self.selected.as_ref() == Some(&id);
                self.selected = Some(id.clone());
                let (is_audio, is_note) = match self.store.get(&id) {
                    Some(item) => (item.kind.is_audio(), matches!(item.kind, ItemKind::Note { .. })),
                    None => (false, false),
                };
                if is_audio {
                    actions.push(Action::ToggleAudio { id });
                } else if is_note && was_selected && self.editing.is_none() {
                    self.begin_edit(&id);
                }
            }
            None => {
                actions.extend(self.commit_edit());
                self.selected = None;
                actions.push(Action::StopAudio);
                self.add_at = Some(world);
            }
        }
        actions
    }

    /// Where the add-note affordance is armed, in world coordinates.
    #[must_use]
    pub fn add_affordance(&self) -> Option<Point> {
        self.add_at
    }

    // --- Zoom / recenter ---

    /// Apply a wheel event: one zoom step per discrete event, clamped.
    pub fn wheel(&mut self, delta: WheelDelta) {
        self.camera.apply_wheel(delta.dy);
    }

    /// Begin the animated return-to-origin pan. Ignored mid-gesture.
    pub fn recenter(&mut self, now_ms: f64) {
        if self.input.is_idle() {
            self.recenter = Some(RecenterAnimation::new(&self.camera, now_ms));
        }
    }

    /// Advance the recenter animation. Emits [`Action::PanChanged`] once the
    /// camera settles at the origin.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Action> {
        let Some(anim) = self.recenter else {
            return Vec::new();
        };
        let (x, y, done) = anim.sample(now_ms);
        self.camera.pan_x = x;
        self.camera.pan_y = y;
        if done {
            self.recenter = None;
            return vec![Action::PanChanged];
        }
        Vec::new()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.recenter.is_some()
    }

    // --- Notes ---

    /// Create a note at the armed affordance point and open its editor with
    /// empty text. No record is written yet: the backend create happens on
    /// the first non-empty commit, so an abandoned note never persists.
    pub fn add_note(&mut self) -> Option<ItemId> {
        let at = self.add_at.take()?;
        let id = ItemId::pending();
        let z_index = self.store.next_z();
        self.store.insert(Item {
            id: id.clone(),
            kind: ItemKind::Note { text: String::new() },
            x: at.x,
            y: at.y,
            z_index,
        });
        self.selected = Some(id.clone());
        self.editing = Some(EditSession { id: id.clone(), draft: String::new(), original: String::new() });
        Some(id)
    }

    /// Open the editor for a note, seeding the draft with its current text.
    pub fn begin_edit(&mut self, id: &ItemId) {
        let Some(Item { kind: ItemKind::Note { text }, .. }) = self.store.get(id) else {
            return;
        };
        self.editing = Some(EditSession { id: id.clone(), draft: text.clone(), original: text.clone() });
    }

    /// Replace the editor draft as the user types.
    pub fn set_draft(&mut self, text: String) {
        if let Some(session) = &mut self.editing {
            session.draft = text;
        }
    }

    /// Commit the open editor. A non-empty trimmed draft is written into the
    /// note and persisted (create on first commit, update afterwards); a
    /// whitespace-only draft deletes the note entirely. Re-committing while
    /// the first create is still in flight queues the newer text instead of
    /// issuing a second create for the same note.
    pub fn commit_edit(&mut self) -> Vec<Action> {
        let Some(session) = self.editing.take() else {
            return Vec::new();
        };
        let trimmed = session.draft.trim();
        if trimmed.is_empty() {
            return self.drop_note(&session.id);
        }

        let text = trimmed.to_owned();
        let Some(item) = self.store.get_mut(&session.id) else {
            return Vec::new();
        };
        item.kind = ItemKind::Note { text: text.clone() };
        let (x, y, z_index) = (item.x, item.y, item.z_index);
        match &session.id {
            ItemId::Pending(temp) => {
                if self.pending.is_in_flight(temp) {
                    self.queued_note_text.insert(*temp, text);
                    return Vec::new();
                }
                self.pending.begin(*temp);
                vec![Action::CreateNote { temp_id: session.id, x, y, z_index, text }]
            }
            ItemId::Committed(_) => vec![Action::UpdateNoteText { id: session.id, text }],
        }
    }

    /// Escape: close the editor without persisting, restoring the pre-edit
    /// text. A note whose pre-edit text was empty (a just-created one) is
    /// removed — an empty note may never remain on the board.
    pub fn cancel_edit(&mut self) -> Vec<Action> {
        let Some(session) = self.editing.take() else {
            return Vec::new();
        };
        if session.original.trim().is_empty() {
            return self.drop_note(&session.id);
        }
        Vec::new()
    }

    /// Route a key press inside the note editor.
    pub fn note_key_down(&mut self, key: &str, shift: bool) -> Vec<Action> {
        match note_key(key, shift) {
            Some(NoteKey::Commit) => self.commit_edit(),
            Some(NoteKey::Cancel) => self.cancel_edit(),
            None => Vec::new(),
        }
    }

    /// Remove a note from the board, cancelling an in-flight create or
    /// deleting its committed record.
    fn drop_note(&mut self, id: &ItemId) -> Vec<Action> {
        self.store.remove(id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        match id {
            ItemId::Pending(temp) => {
                self.pending.cancel(temp);
                self.queued_note_text.remove(temp);
                Vec::new()
            }
            ItemId::Committed(_) => {
                vec![Action::DeleteRecord { collection: Collection::Notes, id: id.clone() }]
            }
        }
    }

    /// The backend assigned a real id to a pending note create. Swaps the
    /// placeholder id atomically and flushes any text committed while the
    /// create was in flight; if the note was deleted mid-flight, asks the
    /// host to delete the fresh record instead of resurrecting the note.
    pub fn commit_note_create(&mut self, temp_id: &ItemId, real_id: String) -> Vec<Action> {
        let ItemId::Pending(temp) = temp_id else {
            return Vec::new();
        };
        match self.pending.finish(temp) {
            Finish::Resolve => {
                let committed = ItemId::Committed(real_id);
                if let Some(item) = self.store.get(temp_id) {
                    let mut item = item.clone();
                    item.id = committed.clone();
                    self.store.swap_id(temp_id, item);
                    self.retarget(temp_id, &committed);
                }
                match self.queued_note_text.remove(temp) {
                    Some(text) => vec![Action::UpdateNoteText { id: committed, text }],
                    None => Vec::new(),
                }
            }
            Finish::Discard => {
                self.queued_note_text.remove(temp);
                vec![Action::DeleteRecord {
                    collection: Collection::Notes,
                    id: ItemId::Committed(real_id),
                }]
            }
            Finish::Unknown => Vec::new(),
        }
    }

    /// A note create failed: roll the optimistic note back.
    pub fn fail_note_create(&mut self, temp_id: &ItemId) {
        if let ItemId::Pending(temp) = temp_id {
            self.pending.fail(temp);
            self.queued_note_text.remove(temp);
        }
        self.store.remove(temp_id);
        self.forget(temp_id);
    }

    // --- File uploads ---

    /// Insert an uploading placeholder tile at the top of the stack and
    /// start tracking the in-flight create. The returned id is what
    /// `finish_upload` / `fail_upload` later resolve.
    pub fn begin_upload(&mut self, name: String, mime_type: String, x: f64, y: f64) -> ItemId {
        let temp = Uuid::new_v4();
        let id = ItemId::Pending(temp);
        self.pending.begin(temp);
        let z_index = self.store.next_z();
        self.store.insert(Item {
            id: id.clone(),
            kind: ItemKind::File { name, mime_type, url: None, uploading: true },
            x,
            y,
            z_index,
        });
        id
    }

    /// The upload and metadata create both succeeded: atomically swap the
    /// placeholder for the committed tile (real id, download URL, spinner
    /// gone), keeping whatever position and z-index the placeholder has now
    /// (it may have been dragged while uploading). If the placeholder was
    /// deleted mid-flight, the fresh backend record is deleted instead.
    pub fn finish_upload(&mut self, temp_id: &ItemId, real_id: String, url: String) -> Vec<Action> {
        let ItemId::Pending(temp) = temp_id else {
            return Vec::new();
        };
        match self.pending.finish(temp) {
            Finish::Resolve => {
                let committed = ItemId::Committed(real_id);
                if let Some(item) = self.store.get(temp_id) {
                    let mut item = item.clone();
                    item.id = committed.clone();
                    if let ItemKind::File { url: slot, uploading, .. } = &mut item.kind {
                        *slot = Some(url);
                        *uploading = false;
                    }
                    self.store.swap_id(temp_id, item);
                    self.retarget(temp_id, &committed);
                }
                Vec::new()
            }
            Finish::Discard => vec![Action::DeleteRecord {
                collection: Collection::Files,
                id: ItemId::Committed(real_id),
            }],
            Finish::Unknown => Vec::new(),
        }
    }

    /// The upload failed: discard the placeholder. The tile never reaches
    /// the board in a half-valid state.
    pub fn fail_upload(&mut self, temp_id: &ItemId) {
        if let ItemId::Pending(temp) = temp_id {
            self.pending.fail(temp);
        }
        self.store.remove(temp_id);
        self.forget(temp_id);
    }

    // --- Deletion ---

    /// Remove an item via its delete affordance. Committed items also delete
    /// their backend record; pending ones cancel the in-flight create so a
    /// late success cannot resurrect them.
    pub fn delete_item(&mut self, id: &ItemId) -> Vec<Action> {
        let Some(item) = self.store.remove(id) else {
            return Vec::new();
        };
        self.forget(id);
        match id {
            ItemId::Pending(temp) => {
                self.pending.cancel(temp);
                self.queued_note_text.remove(temp);
                Vec::new()
            }
            ItemId::Committed(_) => vec![Action::DeleteRecord {
                collection: item.kind.collection(),
                id: id.clone(),
            }],
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    /// Whether the editor is open for this note.
    #[must_use]
    pub fn is_editing(&self, id: &ItemId) -> bool {
        self.editing.as_ref().is_some_and(|s| &s.id == id)
    }

    /// Current editor draft, if an editor is open.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|s| s.draft.as_str())
    }

    // --- Internal ---

    /// Point selection and editing at a new id after a placeholder swap.
    fn retarget(&mut self, old: &ItemId, new: &ItemId) {
        if self.selected.as_ref() == Some(old) {
            self.selected = Some(new.clone());
        }
        if let Some(session) = &mut self.editing
            && &session.id == old
        {
            session.id = new.clone();
        }
    }

    /// Clear selection and editing state that points at a removed id.
    fn forget(&mut self, id: &ItemId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if self.editing.as_ref().is_some_and(|s| &s.id == id) {
            self.editing = None;
        }
    }
}
