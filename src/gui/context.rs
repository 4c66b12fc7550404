//! Per-build GUI context
//!
//! One `GuiContext` is created for every `create_gui` call. It carries what
//! a builder needs while assembling a widget tree: the localization
//! container to look text up in, the widget that should receive focus, and
//! the thumbnails acquired along the way. Nothing here outlives the build.

use super::widget::{ImageRef, Widget, WidgetId, WidgetKind};
use crate::i18n::ENGINE_MENU_TEXT;
use crate::menu::Action;
use std::path::PathBuf;

pub struct GuiContext {
    container: String,
    focus: Option<WidgetId>,
    next_id: usize,
    images: Vec<ImageRef>,
}

impl GuiContext {
    pub(crate) fn new(first_id: usize) -> Self {
        GuiContext {
            container: ENGINE_MENU_TEXT.to_string(),
            focus: None,
            next_id: first_id,
            images: Vec::new(),
        }
    }

    /// Localization container used for text lookups during this build
    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn set_container(&mut self, container: impl Into<String>) {
        self.container = container.into();
    }

    /// Widget to focus once the build is finished
    pub fn focus_target(&self) -> Option<WidgetId> {
        self.focus
    }

    pub fn focus(&mut self, id: WidgetId) {
        self.focus = Some(id);
    }

    /// Focuses `id` unless an earlier widget already claimed focus
    pub fn focus_if_unset(&mut self, id: WidgetId) {
        self.focus.get_or_insert(id);
    }

    pub fn button(&mut self, label: impl Into<String>, action: Action) -> Widget {
        self.widget(WidgetKind::Button {
            label: label.into(),
            action,
            thumbnail: None,
        })
    }

    /// A button showing a thumbnail image, which is held until teardown
    pub fn thumbnail_button(
        &mut self,
        label: impl Into<String>,
        action: Action,
        thumbnail: impl Into<PathBuf>,
    ) -> Widget {
        let thumbnail = thumbnail.into();
        self.images.push(ImageRef::new(thumbnail.clone()));
        self.widget(WidgetKind::Button {
            label: label.into(),
            action,
            thumbnail: Some(thumbnail),
        })
    }

    pub fn label(&mut self, text: impl Into<String>) -> Widget {
        self.widget(WidgetKind::Label {
            text: text.into(),
            disabled: false,
        })
    }

    /// Greyed-out, non-activatable text
    pub fn placeholder(&mut self, text: impl Into<String>) -> Widget {
        self.widget(WidgetKind::Label {
            text: text.into(),
            disabled: true,
        })
    }

    fn widget(&mut self, kind: WidgetKind) -> Widget {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        Widget { id, kind, colspan: 1 }
    }

    pub(crate) fn finish(self) -> (Option<WidgetId>, usize, Vec<ImageRef>) {
        (self.focus, self.next_id, self.images)
    }
}
