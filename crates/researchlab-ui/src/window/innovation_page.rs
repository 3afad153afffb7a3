//! Innovation Lab page: topic in, idea sections out

use gpui::prelude::FluentBuilder;
use gpui::*;
use researchlab_core::IdeaSection;
use researchlab_ui::layout;

use super::lab_window::LabWindow;
use super::{rgb, rgba};

impl LabWindow {
    pub(super) fn render_innovation_page(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let typography = &self.theme.typography;

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.lg))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(4.0))
                    .child(
                        div()
                            .text_size(px(typography.header_size))
                            .font_weight(FontWeight::BOLD)
                            .child("Innovation Lab"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(colors.text_secondary))
                            .child("Generate research ideas for any topic."),
                    ),
            )
            .child(self.render_generate_bar(cx))
            .when_some(self.ideas.error(), |el, error| {
                el.child(
                    div()
                        .id("idea-error")
                        .text_sm()
                        .text_color(rgb(colors.error))
                        .child(error.to_string()),
                )
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(self.theme.spacing.md))
                    .children(
                        self.ideas
                            .sections()
                            .iter()
                            .enumerate()
                            .map(|(idx, section)| self.render_section(idx, section)),
                    ),
            )
    }

    fn render_generate_bar(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_loading = self.ideas.is_loading();

        div()
            .w_full()
            .flex()
            .items_center()
            .gap(px(8.0))
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .h(px(40.0))
                    .px(px(12.0))
                    .flex()
                    .items_center()
                    .rounded(px(layout::BORDER_RADIUS))
                    .bg(rgb(colors.input_bg))
                    .border_1()
                    .border_color(rgb(colors.border))
                    .child(self.idea_input.clone()),
            )
            .child(
                div()
                    .id("generate-button")
                    .h(px(40.0))
                    .px(px(16.0))
                    .flex()
                    .items_center()
                    .rounded(px(layout::BORDER_RADIUS))
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(rgb(colors.on_primary))
                    .when(is_loading, |el| {
                        el.bg(rgb(colors.text_disabled)).cursor_default()
                    })
                    .when(!is_loading, |el| {
                        el.bg(rgb(colors.primary))
                            .cursor_pointer()
                            .hover(|s| s.bg(rgb(colors.primary_hover)))
                            .on_click(cx.listener(|this, _, cx| {
                                this.handle_generate(cx);
                            }))
                    })
                    .child(self.ideas.button_label()),
            )
    }

    fn render_section(&self, idx: usize, section: &IdeaSection) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id(("idea-section", idx))
            .w_full()
            .p(px(self.theme.spacing.lg))
            .flex()
            .flex_col()
            .gap(px(8.0))
            .rounded(px(layout::BORDER_RADIUS))
            .bg(rgb(colors.surface))
            .border_1()
            .border_color(rgb(colors.border_subtle))
            .child(
                div()
                    .text_size(px(self.theme.typography.large_size))
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(section.title.clone()),
            )
            .children(section.ideas.iter().map(|idea| {
                div()
                    .flex()
                    .gap(px(8.0))
                    .text_sm()
                    .child(
                        div()
                            .text_color(rgba(colors.primary))
                            .child("•"),
                    )
                    .child(
                        div()
                            .flex_1()
                            .text_color(rgb(colors.text_secondary))
                            .child(idea.clone()),
                    )
            }))
    }
}
