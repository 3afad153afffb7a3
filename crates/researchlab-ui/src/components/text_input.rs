//! Single-line text input
//!
//! Enough editing for a topic field: typing, paste, grapheme-aware
//! backspace, and Enter to submit.

use gpui::prelude::FluentBuilder;
use gpui::*;
use unicode_segmentation::UnicodeSegmentation;

actions!(text_input, [Backspace, Paste, Submit]);

const KEY_CONTEXT: &str = "TextInput";

/// Register key bindings for every `TextInput` in the app
pub fn register_bindings(cx: &mut AppContext) {
    cx.bind_keys([
        KeyBinding::new("backspace", Backspace, Some(KEY_CONTEXT)),
        KeyBinding::new("enter", Submit, Some(KEY_CONTEXT)),
        KeyBinding::new("cmd-v", Paste, Some(KEY_CONTEXT)),
        KeyBinding::new("ctrl-v", Paste, Some(KEY_CONTEXT)),
    ]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    /// Enter was pressed
    Submitted,
}

pub struct TextInput {
    content: String,
    placeholder: SharedString,
    disabled: bool,
    focus_handle: FocusHandle,
}

impl EventEmitter<TextInputEvent> for TextInput {}

impl TextInput {
    pub fn new(cx: &mut ViewContext<Self>) -> Self {
        Self {
            content: String::new(),
            placeholder: SharedString::default(),
            disabled: false,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>, cx: &mut ViewContext<Self>) {
        self.content = single_line(&content.into());
        cx.notify();
    }

    pub fn clear(&mut self, cx: &mut ViewContext<Self>) {
        self.content.clear();
        cx.notify();
    }

    /// Ignore edits while a request is in flight
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn insert(&mut self, text: &str, cx: &mut ViewContext<Self>) {
        if self.disabled {
            return;
        }
        self.content.push_str(&single_line(text));
        cx.notify();
    }

    fn backspace(&mut self, _: &Backspace, cx: &mut ViewContext<Self>) {
        if self.disabled {
            return;
        }
        if pop_grapheme(&mut self.content) {
            cx.notify();
        }
    }

    fn paste(&mut self, _: &Paste, cx: &mut ViewContext<Self>) {
        if let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) {
            self.insert(&text, cx);
        }
    }

    fn submit(&mut self, _: &Submit, cx: &mut ViewContext<Self>) {
        if !self.disabled {
            cx.emit(TextInputEvent::Submitted);
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, cx: &mut ViewContext<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }
        if let Some(text) = &keystroke.ime_key {
            if !text.chars().any(char::is_control) {
                self.insert(text, cx);
            }
        }
    }
}

/// Remove the last grapheme cluster. Returns false when already empty.
pub fn pop_grapheme(text: &mut String) -> bool {
    match text.grapheme_indices(true).next_back() {
        Some((idx, _)) => {
            text.truncate(idx);
            true
        }
        None => false,
    }
}

/// Collapse line breaks so pasted text stays on one line
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

impl FocusableView for TextInput {
    fn focus_handle(&self, _cx: &AppContext) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let is_empty = self.content.is_empty();
        let is_focused = self.focus_handle.is_focused(cx);

        div()
            .id("text-input")
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::backspace))
            .on_action(cx.listener(Self::paste))
            .on_action(cx.listener(Self::submit))
            .on_key_down(cx.listener(Self::on_key_down))
            .on_click(cx.listener(|this, _, cx| {
                cx.focus(&this.focus_handle);
            }))
            .w_full()
            .min_h(px(20.0))
            .flex()
            .items_center()
            .overflow_hidden()
            .when(self.disabled, |el| el.opacity(0.6).cursor_default())
            .when(!self.disabled, |el| el.cursor_text())
            .when(is_empty, |el| {
                el.child(div().opacity(0.5).child(self.placeholder.clone()))
            })
            .when(!is_empty, |el| el.child(self.content.clone()))
            // Caret
            .when(is_focused && !self.disabled, |el| {
                el.child(div().w(px(1.0)).h(px(16.0)).bg(rgb(0x3b82f6)))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_grapheme() {
        let mut text = "café".to_string();
        assert!(pop_grapheme(&mut text));
        assert_eq!(text, "caf");

        // Combining sequence goes as one unit
        let mut text = "ne\u{301}".to_string();
        assert!(pop_grapheme(&mut text));
        assert_eq!(text, "n");

        let mut empty = String::new();
        assert!(!pop_grapheme(&mut empty));
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\nb\r\nc"), "a b  c");
    }
}
