//! Research Dashboard page
//!
//! Left column: progress bar, agent activity and saved topics.
//! Right column: the results panel.

use gpui::prelude::FluentBuilder;
use gpui::*;
use researchlab_core::views::{EMPTY_STATE_MESSAGE, SCORE_HEADING};
use researchlab_core::{
    format_score, AgentPhase, PaperCard, ResearchResult, ResultSection, ResultState,
};
use researchlab_ui::layout;

use super::lab_window::LabWindow;
use super::{rgb, rgba};

impl LabWindow {
    pub(super) fn render_dashboard_page(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_loading = self.dashboard.is_loading();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.lg))
            // Header with status pill
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(self.theme.typography.header_size))
                            .font_weight(FontWeight::BOLD)
                            .child("Research Dashboard"),
                    )
                    .child(
                        div()
                            .px(px(10.0))
                            .py(px(2.0))
                            .rounded_full()
                            .text_xs()
                            .font_weight(FontWeight::MEDIUM)
                            .bg(rgb(colors.surface_elevated))
                            .text_color(rgb(if is_loading {
                                colors.warning
                            } else {
                                colors.success
                            }))
                            .child(self.dashboard.status_label()),
                    ),
            )
            .child(self.render_research_bar(cx))
            .when_some(self.dashboard.alert(), |el, alert| {
                el.child(self.render_alert(alert.to_string(), cx))
            })
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_start()
                    .gap(px(self.theme.spacing.lg))
                    .child(
                        div()
                            .w(px(layout::AGENT_PANEL_WIDTH))
                            .flex_shrink_0()
                            .flex()
                            .flex_col()
                            .gap(px(self.theme.spacing.md))
                            .child(self.render_progress())
                            .child(self.render_agent_activity())
                            .child(self.render_saved_list(cx)),
                    )
                    .child(
                        div()
                            .flex_1()
                            .min_w_0()
                            .child(self.render_results(cx)),
                    ),
            )
    }

    fn render_research_bar(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_loading = self.dashboard.is_loading();

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
                    .child(self.research_input.clone()),
            )
            .child(
                div()
                    .id("research-button")
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
                                this.handle_research(cx);
                            }))
                    })
                    .child(self.dashboard.button_label()),
            )
    }

    fn render_alert(&self, message: String, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .w_full()
            .px(px(12.0))
            .py(px(8.0))
            .flex()
            .items_center()
            .justify_between()
            .rounded(px(layout::BORDER_RADIUS_SM))
            .bg(rgba(colors.error.with_alpha(0.12)))
            .border_1()
            .border_color(rgb(colors.error))
            .text_sm()
            .text_color(rgb(colors.error))
            .child(message)
            .child(
                div()
                    .id("dismiss-alert")
                    .px(px(4.0))
                    .cursor_pointer()
                    .on_click(cx.listener(|this, _, cx| {
                        this.dismiss_alert(cx);
                    }))
                    .child("×"),
            )
    }

    // ========================================================================
    // Left column
    // ========================================================================

    fn render_progress(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        let progress = self.dashboard.progress();

        self.render_card("Progress").child(
            div()
                .flex()
                .flex_col()
                .gap(px(6.0))
                .child(
                    div()
                        .w_full()
                        .h(px(layout::PROGRESS_BAR_HEIGHT))
                        .rounded_full()
                        .overflow_hidden()
                        .bg(rgb(colors.progress_track))
                        .child(
                            div()
                                .h_full()
                                .w(relative(f32::from(progress) / 100.0))
                                .rounded_full()
                                .bg(rgb(colors.primary)),
                        ),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(colors.text_secondary))
                        .child(format!("{}%", progress)),
                ),
        )
    }

    fn render_agent_activity(&self) -> impl IntoElement {
        self.render_card("Agent Activity").child(
            div()
                .flex()
                .flex_col()
                .gap(px(4.0))
                .children(AgentPhase::ALL.into_iter().map(|phase| self.render_agent_row(phase))),
        )
    }

    fn render_agent_row(&self, phase: AgentPhase) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_active = self.dashboard.active_phase() == Some(phase);

        div()
            .id(phase.id())
            .w_full()
            .px(px(8.0))
            .py(px(6.0))
            .flex()
            .items_center()
            .gap(px(8.0))
            .rounded(px(layout::BORDER_RADIUS_SM))
            .when(is_active, |el| {
                el.bg(rgb(colors.surface_elevated))
                    .border_1()
                    .border_color(rgb(colors.focus_ring))
            })
            .child(div().child(phase.icon()))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(div().text_sm().child(phase.name()))
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(if is_active {
                                colors.warning
                            } else {
                                colors.text_secondary
                            }))
                            .child(self.dashboard.phase_status(phase)),
                    ),
            )
    }

    fn render_saved_list(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let saved = self.dashboard.saved_bookmarks();
        let show_saved = self.show_saved;

        div()
            .w_full()
            .flex()
            .flex_col()
            .rounded(px(layout::BORDER_RADIUS))
            .bg(rgb(colors.surface))
            .border_1()
            .border_color(rgb(colors.border_subtle))
            .child(
                div()
                    .id("saved-header")
                    .w_full()
                    .px(px(12.0))
                    .py(px(10.0))
                    .flex()
                    .items_center()
                    .justify_between()
                    .cursor_pointer()
                    .hover(|s| s.bg(rgba(colors.hover)))
                    .on_click(cx.listener(|this, _, cx| {
                        this.toggle_saved(cx);
                    }))
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(format!("Saved ({})", saved.len())),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text_secondary))
                            .child(if show_saved { "▾" } else { "▸" }),
                    ),
            )
            .when(show_saved && saved.is_empty(), |el| {
                el.child(
                    div()
                        .px(px(12.0))
                        .pb(px(10.0))
                        .text_xs()
                        .text_color(rgb(colors.text_secondary))
                        .child("No saved topics yet."),
                )
            })
            .when(show_saved, |el| {
                el.children(saved.into_iter().enumerate().map(|(idx, bookmark)| {
                    let open_topic = bookmark.topic.clone();
                    let remove_topic = bookmark.topic.clone();

                    div()
                        .id(("saved", idx))
                        .w_full()
                        .px(px(12.0))
                        .py(px(6.0))
                        .flex()
                        .items_center()
                        .gap(px(8.0))
                        .border_t_1()
                        .border_color(rgb(colors.border_subtle))
                        .child(
                            div()
                                .id(("saved-open", idx))
                                .flex_1()
                                .min_w_0()
                                .flex()
                                .flex_col()
                                .cursor_pointer()
                                .on_click(cx.listener(move |this, _, cx| {
                                    this.open_saved(open_topic.clone(), cx);
                                }))
                                .child(div().text_sm().child(bookmark.topic.clone()))
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(rgb(colors.text_secondary))
                                        .child(format!(
                                            "{} · Score: {}/10",
                                            bookmark.date.format("%Y-%m-%d"),
                                            format_score(bookmark.score)
                                        )),
                                ),
                        )
                        .child(
                            div()
                                .id(("saved-remove", idx))
                                .px(px(4.0))
                                .text_color(rgb(colors.text_secondary))
                                .cursor_pointer()
                                .hover(|s| s.text_color(rgb(colors.error)))
                                .on_click(cx.listener(move |this, _, cx| {
                                    this.remove_saved(&remove_topic, cx);
                                }))
                                .child("×"),
                        )
                }))
            })
    }

    /// Bordered card with a small heading
    fn render_card(&self, title: &'static str) -> Div {
        let colors = &self.theme.colors;

        div()
            .w_full()
            .p(px(12.0))
            .flex()
            .flex_col()
            .gap(px(8.0))
            .rounded(px(layout::BORDER_RADIUS))
            .bg(rgb(colors.surface))
            .border_1()
            .border_color(rgb(colors.border_subtle))
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(title),
            )
    }

    // ========================================================================
    // Results panel
    // ========================================================================

    fn render_results(&self, cx: &mut ViewContext<Self>) -> AnyElement {
        let colors = &self.theme.colors;

        match self.dashboard.result_state() {
            ResultState::NoResult => div()
                .w_full()
                .p(px(self.theme.spacing.xl))
                .flex()
                .justify_center()
                .rounded(px(layout::BORDER_RADIUS))
                .border_1()
                .border_color(rgb(colors.border_subtle))
                .text_sm()
                .text_color(rgb(colors.text_secondary))
                .child(EMPTY_STATE_MESSAGE)
                .into_any_element(),
            ResultState::Loading => div()
                .w_full()
                .p(px(self.theme.spacing.xl))
                .flex()
                .justify_center()
                .text_sm()
                .text_color(rgb(colors.text_secondary))
                .child("Agents are analysing your topic...")
                .into_any_element(),
            ResultState::Ready(result) => self.render_result(result, cx).into_any_element(),
        }
    }

    fn render_result(
        &self,
        result: &ResearchResult,
        cx: &mut ViewContext<Self>,
    ) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_bookmarked = self.dashboard.is_bookmarked();

        // Card ids stay stable across the top and related groups
        let (top_cards, related_cards): (Vec<_>, Vec<_>) = self
            .dashboard
            .paper_cards()
            .into_iter()
            .enumerate()
            .partition(|(_, card)| card.is_main);
        let mut top_cards = Some(top_cards);
        let mut related_cards = Some(related_cards);

        let sections = self.dashboard.result_sections();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.md))
            .child(
                div()
                    .w_full()
                    .p(px(self.theme.spacing.lg))
                    .flex()
                    .items_start()
                    .justify_between()
                    .rounded(px(layout::BORDER_RADIUS))
                    .bg(rgb(colors.surface_elevated))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(4.0))
                            .child(
                                div()
                                    .text_size(px(self.theme.typography.large_size))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .child(SCORE_HEADING),
                            )
                            .child(
                                div()
                                    .text_size(px(self.theme.typography.header_size))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(rgb(colors.primary))
                                    .child(format!("{}/10", format_score(result.score))),
                            ),
                    )
                    .child(
                        div()
                            .id("bookmark-toggle")
                            .px(px(10.0))
                            .py(px(4.0))
                            .rounded(px(layout::BORDER_RADIUS_SM))
                            .border_1()
                            .border_color(rgb(colors.border))
                            .text_sm()
                            .cursor_pointer()
                            .hover(|s| s.bg(rgba(colors.hover)))
                            .when(is_bookmarked, |el| el.text_color(rgb(colors.warning)))
                            .on_click(cx.listener(|this, _, cx| {
                                this.toggle_bookmark(cx);
                            }))
                            .child(if is_bookmarked {
                                "★ Bookmarked"
                            } else {
                                "☆ Bookmark"
                            }),
                    ),
            )
            .children(sections.into_iter().map(|section| {
                let body = div().flex().flex_col().gap(px(8.0));
                let body = match section {
                    ResultSection::TopResult => body.children(
                        top_cards
                            .take()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|(idx, card)| self.render_paper_card(idx, card, cx)),
                    ),
                    ResultSection::RelatedPapers => body.children(
                        related_cards
                            .take()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|(idx, card)| self.render_paper_card(idx, card, cx)),
                    ),
                    ResultSection::Insights => {
                        body.children(self.render_bullets(&result.insights, colors.text_secondary))
                    }
                    ResultSection::Feedback => {
                        body.children(self.render_bullets(&result.feedback, colors.warning))
                    }
                };

                div()
                    .flex()
                    .flex_col()
                    .gap(px(8.0))
                    .child(
                        div()
                            .text_size(px(self.theme.typography.large_size))
                            .font_weight(FontWeight::MEDIUM)
                            .child(section.title()),
                    )
                    .child(body)
            }))
    }

    fn render_paper_card(
        &self,
        idx: usize,
        card: PaperCard,
        cx: &mut ViewContext<Self>,
    ) -> impl IntoElement {
        let colors = &self.theme.colors;
        let badge = colors.badge(card.source_tone);

        div()
            .id(("paper", idx))
            .w_full()
            .p(px(self.theme.spacing.lg))
            .flex()
            .flex_col()
            .gap(px(8.0))
            .rounded(px(layout::BORDER_RADIUS))
            .border_1()
            .when(card.is_main, |el| {
                el.bg(rgb(colors.surface_elevated))
                    .border_color(rgb(colors.primary))
            })
            .when(!card.is_main, |el| {
                el.bg(rgb(colors.surface))
                    .border_color(rgb(colors.border_subtle))
            })
            .when(card.is_main, |el| {
                el.child(
                    div()
                        .text_xs()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(rgb(colors.primary))
                        .child("TOP PAPER"),
                )
            })
            .child(
                div()
                    .flex()
                    .items_start()
                    .justify_between()
                    .gap(px(8.0))
                    .child(
                        div()
                            .flex_1()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(card.title.clone()),
                    )
                    .when_some(card.score_label.clone(), |el, score| {
                        el.child(
                            div()
                                .flex_shrink_0()
                                .text_sm()
                                .text_color(rgb(colors.text_secondary))
                                .child(score),
                        )
                    }),
            )
            .child(
                div().flex().child(
                    div()
                        .px(px(8.0))
                        .py(px(1.0))
                        .rounded_full()
                        .text_xs()
                        .bg(rgb(badge.bg))
                        .text_color(rgb(badge.text))
                        .child(card.source_label.clone()),
                ),
            )
            .when_some(card.authors_line.clone(), |el, authors| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(rgb(colors.text_secondary))
                        .child(authors),
                )
            })
            .when_some(card.abstract_preview.clone(), |el, preview| {
                el.child(div().text_sm().child(preview))
            })
            .when(!card.links.is_empty(), |el| {
                el.child(div().flex().gap(px(16.0)).children(
                    card.links.into_iter().enumerate().map(|(link_idx, link)| {
                        let url = link.url;
                        div()
                            .id(("paper-link", idx * 2 + link_idx))
                            .text_sm()
                            .text_color(rgb(colors.text_link))
                            .cursor_pointer()
                            .hover(|s| s.text_color(rgb(colors.primary_hover)))
                            .on_click(cx.listener(move |_, _, cx| {
                                cx.open_url(&url);
                            }))
                            .child(link.label)
                    }),
                ))
            })
    }

    fn render_bullets(&self, items: &[String], text: researchlab_ui::Rgba) -> Vec<Div> {
        let colors = &self.theme.colors;

        items
            .iter()
            .map(|item| {
                div()
                    .p(px(10.0))
                    .rounded(px(layout::BORDER_RADIUS))
                    .bg(rgb(colors.surface))
                    .text_sm()
                    .text_color(rgb(text))
                    .child(item.clone())
            })
            .collect()
    }
}
