//! Settings page

use gpui::*;
use researchlab_ui::layout;

use super::lab_window::LabWindow;
use super::{rgb, rgba};

impl LabWindow {
    pub(super) fn render_settings_page(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_dark = self.settings.is_dark_mode();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.lg))
            .child(
                div()
                    .text_size(px(self.theme.typography.header_size))
                    .font_weight(FontWeight::BOLD)
                    .child("Settings"),
            )
            .child(
                div()
                    .w_full()
                    .p(px(self.theme.spacing.lg))
                    .flex()
                    .items_center()
                    .justify_between()
                    .rounded(px(layout::BORDER_RADIUS))
                    .bg(rgb(colors.surface))
                    .border_1()
                    .border_color(rgb(colors.border_subtle))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(2.0))
                            .child(div().font_weight(FontWeight::MEDIUM).child("Dark Mode"))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(colors.text_secondary))
                                    .child(if is_dark {
                                        "Switch to the light theme"
                                    } else {
                                        "Switch to the dark theme"
                                    }),
                            ),
                    )
                    .child(
                        div()
                            .id("dark-mode-toggle")
                            .w(px(40.0))
                            .h(px(40.0))
                            .flex()
                            .items_center()
                            .justify_center()
                            .rounded_full()
                            .bg(rgb(colors.surface_elevated))
                            .border_1()
                            .border_color(rgb(colors.border))
                            .cursor_pointer()
                            .hover(|s| s.bg(rgba(colors.hover)))
                            .on_click(cx.listener(|this, _, cx| {
                                this.toggle_dark_mode(cx);
                            }))
                            .child(self.settings.toggle_icon()),
                    ),
            )
    }
}
