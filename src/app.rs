//! Root application module.
//!
//! Contains the main App component, AppContext definition, the
//! LayoutController, and application-level setup logic following Leptos
//! conventions.

use leptos::prelude::*;
use meto_core::models::Preferences;
use meto_core::{DataSource, LayoutMode, LayoutState, TomlDataSource};

use crate::components::AppRouter;
use crate::utils::dom;

// ============================================================================
// LayoutController
// ============================================================================

/// Width assumed when the viewport cannot be measured.
const FALLBACK_WIDTH: f64 = 1024.0;

/// Reactive owner of the sidebar [`LayoutState`].
///
/// All mutations go through [`LayoutState`]'s transition methods so the
/// rules (menu closes on leaving mobile, collapse survives resizes) live in
/// one place.
#[derive(Clone, Copy)]
pub struct LayoutController {
    state: RwSignal<LayoutState>,
}

impl LayoutController {
    /// Initial state for the current viewport.
    pub fn new() -> Self {
        let width = dom::viewport_width().unwrap_or(FALLBACK_WIDTH);
        Self {
            state: RwSignal::new(LayoutState::from_width(width)),
        }
    }

    /// Tracked read of the layout state.
    pub fn get(&self) -> LayoutState {
        self.state.get()
    }

    /// Apply a viewport resize. Signals only fire when something changed.
    pub fn resize(&self, width: f64) {
        let current = self.state.get_untracked();
        let mut next = current;
        let crossed = next.resize(width);

        if next != current {
            self.state.set(next);
        }

        if let Some(mode) = crossed {
            let label = match mode {
                LayoutMode::Mobile => "mobile",
                LayoutMode::Desktop => "desktop",
            };
            web_sys::console::log_1(&format!("Layout: switched to {} ({}px)", label, width).into());
        }
    }

    /// Read-only view of the state, for components that report changes
    /// through callbacks instead of mutating it.
    pub fn signal(&self) -> Signal<LayoutState> {
        self.state.into()
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.state.update(|s| s.set_collapsed(collapsed));
    }

    pub fn set_mobile_menu(&self, open: bool) {
        self.state.update(|s| s.set_mobile_menu(open));
    }

    pub fn toggle_mobile_menu(&self) {
        self.state.update(|s| s.toggle_mobile_menu());
    }

    pub fn close_mobile_menu(&self) {
        self.state.update(|s| s.close_mobile_menu());
    }
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sidebar and mobile menu state.
    pub layout: LayoutController,

    /// Settings page form state. Applied to the shell as theme attributes;
    /// never persisted.
    pub preferences: RwSignal<Preferences>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            layout: LayoutController::new(),
            preferences: RwSignal::new(Preferences::default()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Loads the embedded sample data
/// - Renders the router, or the error panel if the data failed to load
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #f8fafc;
                    color: #1e293b;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #64748b; margin-bottom: 2rem;">
                            "The dashboard data could not be loaded."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            border: 1px solid #e2e8f0;
                            padding: 1rem;
                            border-radius: 0.75rem;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #475569;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #dc2626;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #4f46e5;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 0.5rem;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {TomlDataSource::embedded()
                .load()
                .inspect_err(|e| {
                    web_sys::console::error_1(&format!("Failed to load dashboard data: {}", e).into());
                })
                .map(|dataset| view! { <AppRouter dataset=dataset /> })}
        </ErrorBoundary>
    }
}
