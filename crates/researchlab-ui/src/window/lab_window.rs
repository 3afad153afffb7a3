//! Main ResearchLab window: a tab bar over the three pages
//!
//! Page state lives in the core view-models; this view owns them, forwards
//! input, and drains finished jobs from a 100 ms poll timer.

use gpui::prelude::FluentBuilder;
use gpui::*;
use researchlab_core::{IdeaGenerator, ResearchDashboard, SettingsPage};
use researchlab_ui::{
    components::{TextInput, TextInputEvent},
    layout, ActivePage, AppState, JobManager, Theme,
};
use std::time::Duration;
use tracing::{info, warn};

use super::{rgb, rgba};

/// Interval between job polls
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// Window State
// ============================================================================

pub struct LabWindow {
    pub(super) theme: Theme,
    pub(super) active_page: ActivePage,
    /// Runs backend jobs off the UI thread
    pub(super) jobs: JobManager,
    pub(super) ideas: IdeaGenerator,
    pub(super) dashboard: ResearchDashboard,
    pub(super) settings: SettingsPage,
    /// Topic input on the Innovation Lab page
    pub(super) idea_input: View<TextInput>,
    /// Topic input on the Research Dashboard page
    pub(super) research_input: View<TextInput>,
    /// Whether the saved-topics list is expanded
    pub(super) show_saved: bool,
    focus_handle: FocusHandle,
}

impl LabWindow {
    pub fn new(cx: &mut ViewContext<Self>, state: &AppState, jobs: JobManager) -> Self {
        let settings = state.settings_page();
        let theme = Theme::for_mode(settings.is_dark_mode());
        let dashboard = state.research_dashboard();

        let idea_input = cx.new_view(|cx| {
            let mut input = TextInput::new(cx);
            input.set_placeholder("Enter a topic to explore...");
            input
        });

        // Keep the generator's topic in sync with the input
        cx.observe(&idea_input, |this, input, cx| {
            let topic = input.read(cx).content().to_string();
            this.ideas.set_topic(topic);
            cx.notify();
        })
        .detach();

        cx.subscribe(&idea_input, |this, _, event: &TextInputEvent, cx| match event {
            TextInputEvent::Submitted => this.handle_generate(cx),
        })
        .detach();

        let initial_topic = dashboard.topic();
        let research_input = cx.new_view(|cx| {
            let mut input = TextInput::new(cx);
            input.set_placeholder("Enter a research topic...");
            input.set_content(initial_topic, cx);
            input
        });

        // The dashboard topic lives in the shared research store
        cx.observe(&research_input, |this, input, cx| {
            let topic = input.read(cx).content().to_string();
            if topic != this.dashboard.topic() {
                this.dashboard.set_topic(topic);
            }
            cx.notify();
        })
        .detach();

        cx.subscribe(&research_input, |this, _, event: &TextInputEvent, cx| match event {
            TextInputEvent::Submitted => this.handle_research(cx),
        })
        .detach();

        // Spawn a timer to poll for finished jobs
        cx.spawn(|view, mut cx| async move {
            loop {
                cx.background_executor().timer(POLL_INTERVAL).await;

                let updated = view.update(&mut cx, |this, cx| {
                    if this.poll_jobs(cx) {
                        cx.notify();
                    }
                });
                if updated.is_err() {
                    break;
                }
            }
        })
        .detach();

        Self {
            theme,
            active_page: ActivePage::default(),
            jobs,
            ideas: state.idea_generator(),
            dashboard,
            settings,
            idea_input,
            research_input,
            show_saved: false,
            focus_handle: cx.focus_handle(),
        }
    }

    // ========================================================================
    // Event Handlers
    // ========================================================================

    fn poll_jobs(&mut self, cx: &mut ViewContext<Self>) -> bool {
        if !self.jobs.has_pending_operation() {
            return false;
        }

        let ideas_changed = self.jobs.poll_ideas(&mut self.ideas);
        let research_changed = self.jobs.poll_research(&mut self.dashboard);
        if ideas_changed || research_changed {
            self.sync_input_state(cx);
        }
        ideas_changed || research_changed
    }

    /// Inputs are read-only while their page has a request in flight
    fn sync_input_state(&mut self, cx: &mut ViewContext<Self>) {
        let ideas_loading = self.ideas.is_loading();
        self.idea_input.update(cx, |input, _| input.set_disabled(ideas_loading));

        let research_loading = self.dashboard.is_loading();
        self.research_input
            .update(cx, |input, _| input.set_disabled(research_loading));
    }

    pub(super) fn handle_generate(&mut self, cx: &mut ViewContext<Self>) {
        if self.jobs.start_generate(&mut self.ideas) {
            self.sync_input_state(cx);
        }
        cx.notify();
    }

    pub(super) fn handle_research(&mut self, cx: &mut ViewContext<Self>) {
        if self.jobs.start_research(&mut self.dashboard) {
            self.sync_input_state(cx);
        }
        cx.notify();
    }

    pub(super) fn dismiss_alert(&mut self, cx: &mut ViewContext<Self>) {
        self.dashboard.dismiss_alert();
        cx.notify();
    }

    pub(super) fn toggle_bookmark(&mut self, cx: &mut ViewContext<Self>) {
        if let Err(e) = self.dashboard.toggle_bookmark() {
            warn!("Failed to toggle bookmark: {}", e);
        }
        cx.notify();
    }

    pub(super) fn toggle_saved(&mut self, cx: &mut ViewContext<Self>) {
        self.show_saved = !self.show_saved;
        cx.notify();
    }

    /// Load a saved topic into the dashboard input
    pub(super) fn open_saved(&mut self, topic: String, cx: &mut ViewContext<Self>) {
        if self.dashboard.is_loading() {
            return;
        }
        self.research_input
            .update(cx, |input, cx| input.set_content(topic, cx));
        cx.notify();
    }

    pub(super) fn remove_saved(&mut self, topic: &str, cx: &mut ViewContext<Self>) {
        if let Err(e) = self.dashboard.remove_saved(topic) {
            warn!("Failed to remove bookmark {:?}: {}", topic, e);
        }
        cx.notify();
    }

    pub(super) fn toggle_dark_mode(&mut self, cx: &mut ViewContext<Self>) {
        let dark = self.settings.toggle_dark_mode();
        self.theme = Theme::for_mode(dark);
        info!("Theme switched: {}", if dark { "dark" } else { "light" });
        cx.notify();
    }

    fn select_page(&mut self, page: ActivePage, cx: &mut ViewContext<Self>) {
        if self.active_page == page {
            return;
        }
        self.active_page = page;
        match page {
            ActivePage::InnovationLab => cx.focus_view(&self.idea_input),
            ActivePage::ResearchDashboard => cx.focus_view(&self.research_input),
            ActivePage::Settings => cx.focus(&self.focus_handle),
        }
        cx.notify();
    }

    // ========================================================================
    // Tab Bar
    // ========================================================================

    fn render_tab_bar(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id("tab-bar")
            .w_full()
            .h(px(layout::TAB_BAR_HEIGHT))
            .flex_shrink_0()
            .px(px(16.0))
            .flex()
            .items_center()
            .justify_between()
            .bg(rgb(colors.tab_bar_bg))
            .border_b_1()
            .border_color(rgb(colors.border))
            // Left side: app title (with space for traffic lights on macOS)
            .child(
                div()
                    .pl(px(70.0))
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(rgb(colors.text_primary))
                    .child("ResearchLab"),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(4.0))
                    .children(ActivePage::ALL.into_iter().map(|page| {
                        let is_active = self.active_page == page;
                        div()
                            .id(page.title())
                            .px(px(12.0))
                            .py(px(6.0))
                            .rounded(px(layout::BORDER_RADIUS_SM))
                            .text_sm()
                            .cursor_pointer()
                            .when(is_active, |el| {
                                el.bg(rgb(colors.primary))
                                    .text_color(rgb(colors.on_primary))
                            })
                            .when(!is_active, |el| {
                                el.text_color(rgb(colors.text_secondary))
                                    .hover(|s| s.bg(rgba(colors.hover)))
                            })
                            .on_click(cx.listener(move |this, _, cx| {
                                this.select_page(page, cx);
                            }))
                            .child(page.title())
                    })),
            )
    }
}

// ============================================================================
// Render Implementation
// ============================================================================

impl FocusableView for LabWindow {
    fn focus_handle(&self, _cx: &AppContext) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for LabWindow {
    fn render(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        let page = match self.active_page {
            ActivePage::InnovationLab => self.render_innovation_page(cx).into_any_element(),
            ActivePage::ResearchDashboard => self.render_dashboard_page(cx).into_any_element(),
            ActivePage::Settings => self.render_settings_page(cx).into_any_element(),
        };

        div()
            .id("researchlab-window")
            .key_context("LabWindow")
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(colors.app_bg))
            .text_color(rgb(colors.text_primary))
            .child(self.render_tab_bar(cx))
            .child(
                div()
                    .id("page")
                    .flex_1()
                    .min_h_0()
                    .overflow_y_scroll()
                    .flex()
                    .justify_center()
                    .child(
                        div()
                            .w_full()
                            .max_w(px(layout::CONTENT_MAX_WIDTH))
                            .p(px(self.theme.spacing.xl))
                            .child(page),
                    ),
            )
    }
}
