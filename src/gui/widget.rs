//! Widget tree owned by the menu service
//!
//! Windows hold rows of widgets. The [`Stage`] holds every open window, the
//! focused widget, and the thumbnail images acquired while building. Widget
//! ids are unique for the lifetime of a stage.

use crate::menu::{Action, MenuStateId};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// Activatable element
    Button {
        label: String,
        action: Action,
        thumbnail: Option<PathBuf>,
    },

    /// Static text; `disabled` renders it greyed out (empty save slot)
    Label { text: String, disabled: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub colspan: u8,
}

impl Widget {
    pub fn with_colspan(mut self, colspan: u8) -> Self {
        self.colspan = colspan.max(1);
        self
    }

    pub fn text(&self) -> &str {
        match &self.kind {
            WidgetKind::Button { label, .. } => label,
            WidgetKind::Label { text, .. } => text,
        }
    }

    pub fn action(&self) -> Option<&Action> {
        match &self.kind {
            WidgetKind::Button { action, .. } => Some(action),
            WidgetKind::Label { .. } => None,
        }
    }

    pub fn thumbnail(&self) -> Option<&Path> {
        match &self.kind {
            WidgetKind::Button { thumbnail, .. } => thumbnail.as_deref(),
            WidgetKind::Label { .. } => None,
        }
    }

    pub fn is_activatable(&self) -> bool {
        matches!(self.kind, WidgetKind::Button { .. })
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.kind, WidgetKind::Label { disabled: true, .. })
    }
}

/// A titled box of widget rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub title: String,
    pub rows: Vec<Vec<Widget>>,
    /// Requested size in pixels; `None` packs to content
    pub size: Option<(u32, u32)>,
    pub centered: bool,
}

impl Window {
    pub fn new(title: impl Into<String>) -> Self {
        Window {
            title: title.into(),
            rows: Vec::new(),
            size: None,
            centered: false,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Starts a new row; following `add` calls go into it
    pub fn row(&mut self) -> &mut Self {
        self.rows.push(Vec::new());
        self
    }

    /// Adds a widget to the current row
    pub fn add(&mut self, widget: Widget) -> WidgetId {
        let id = widget.id;
        match self.rows.last_mut() {
            Some(row) => row.push(widget),
            None => self.rows.push(vec![widget]),
        }
        id
    }

    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.rows.iter().flatten()
    }

    pub fn find(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets().find(|w| w.id == id)
    }
}

/// A thumbnail held while the GUI that shows it is open
///
/// Dropping the reference releases the image.
#[derive(Debug)]
pub struct ImageRef {
    path: PathBuf,
}

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ImageRef { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ImageRef {
    fn drop(&mut self) {
        log::debug!("released thumbnail {}", self.path.display());
    }
}

/// Windows and images one state's build added to the stage
#[derive(Debug, Clone, Copy)]
struct Layer {
    state: MenuStateId,
    first_window: usize,
    first_image: usize,
}

/// Every window currently on screen
///
/// Windows are grouped into one layer per state build. Re-entering a state
/// that still has a layer drops that layer and everything above it first.
#[derive(Debug, Default)]
pub struct Stage {
    windows: Vec<Window>,
    layers: Vec<Layer>,
    focus: Option<WidgetId>,
    images: Vec<ImageRef>,
    next_id: usize,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// The window that receives focus navigation
    pub fn top(&self) -> Option<&Window> {
        self.windows.last()
    }

    pub fn add_window(&mut self, window: Window) -> usize {
        self.windows.push(window);
        self.windows.len() - 1
    }

    pub fn center(&mut self, index: usize) {
        if let Some(window) = self.windows.get_mut(index) {
            window.centered = true;
        }
    }

    /// Closes every window and releases the images they used
    pub fn clear(&mut self) {
        self.windows.clear();
        self.layers.clear();
        self.images.clear();
        self.focus = None;
    }

    /// States that currently have windows or images on the stage, bottom first
    pub fn layer_states(&self) -> impl Iterator<Item = MenuStateId> + '_ {
        self.layers.iter().map(|l| l.state)
    }

    /// Opens a layer for a build of `state`, unwinding any earlier one
    pub(crate) fn begin_layer(&mut self, state: MenuStateId) {
        if let Some(index) = self.layers.iter().position(|l| l.state == state) {
            let layer = self.layers[index];
            self.layers.truncate(index);
            self.windows.truncate(layer.first_window);
            self.images.truncate(layer.first_image);
            self.focus = None;
        }
        self.layers.push(Layer {
            state,
            first_window: self.windows.len(),
            first_image: self.images.len(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn find(&self, id: WidgetId) -> Option<&Widget> {
        self.windows.iter().find_map(|w| w.find(id))
    }

    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Focuses `id` if it is an activatable widget on the stage
    pub fn set_focus(&mut self, id: WidgetId) -> bool {
        match self.find(id) {
            Some(widget) if widget.is_activatable() => {
                self.focus = Some(id);
                true
            }
            _ => false,
        }
    }

    pub fn focus_next(&mut self) -> bool {
        self.step_focus(true)
    }

    pub fn focus_previous(&mut self) -> bool {
        self.step_focus(false)
    }

    fn step_focus(&mut self, forward: bool) -> bool {
        let candidates: Vec<WidgetId> = match self.top() {
            Some(window) => window
                .widgets()
                .filter(|w| w.is_activatable())
                .map(|w| w.id)
                .collect(),
            None => return false,
        };
        if candidates.is_empty() {
            return false;
        }

        let len = candidates.len();
        let next = match self.focus.and_then(|f| candidates.iter().position(|&c| c == f)) {
            Some(i) if forward => (i + 1) % len,
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.focus = Some(candidates[next]);
        true
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> impl Iterator<Item = &Path> {
        self.images.iter().map(|i| i.path())
    }

    pub(crate) fn next_widget_id(&self) -> usize {
        self.next_id
    }

    pub(crate) fn finish_build(&mut self, next_id: usize, images: Vec<ImageRef>) {
        self.next_id = self.next_id.max(next_id);
        self.images.extend(images);
    }
}
