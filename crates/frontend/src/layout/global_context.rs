use crate::navigation::modules::{self, ModuleFlags};
use leptos::prelude::*;

/// Rendering intensity toggle. `Reduced` switches off non-essential
/// transitions (tour overlay animation, sidebar easing).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PerformanceMode {
    #[default]
    Full,
    Reduced,
}

/// Shared application state, injected once at the app root.
///
/// The navigation engine only ever reads these signals and mutates them
/// through the explicit methods below; it holds no globals of its own.
/// Everything here is session-scoped and in-memory - nothing survives a
/// reload.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar_collapsed: RwSignal<bool>,
    pub selected_sector: RwSignal<Option<String>>,
    pub enabled_modules: RwSignal<ModuleFlags>,
    pub performance_mode: RwSignal<PerformanceMode>,
    /// One-shot session marker: once the tour completes or is skipped it
    /// never re-arms until the next reload.
    pub tour_done: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_collapsed: RwSignal::new(false),
            selected_sector: RwSignal::new(None),
            enabled_modules: RwSignal::new(modules::default_flags()),
            performance_mode: RwSignal::new(PerformanceMode::Full),
            tour_done: RwSignal::new(false),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|val| *val = !*val);
    }

    pub fn set_selected_sector(&self, sector: Option<String>) {
        leptos::logging::log!("sector selected: {:?}", sector);
        self.selected_sector.set(sector);
    }

    pub fn is_module_enabled(&self, module_id: &str) -> bool {
        self.enabled_modules
            .with(|flags| flags.get(module_id).copied().unwrap_or(false))
    }

    pub fn set_module_enabled(&self, module_id: &str, enabled: bool) {
        self.enabled_modules.update(|flags| {
            flags.insert(module_id.to_string(), enabled);
        });
    }

    pub fn set_performance_mode(&self, mode: PerformanceMode) {
        self.performance_mode.set(mode);
    }

    pub fn mark_tour_done(&self) {
        self.tour_done.set(true);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
