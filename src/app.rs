//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{Community, Dashboard, Report, Settings};
use crate::state::global::{provide_global_state, ConnectionStatus, GlobalState};
use crate::state::polling::start_polling;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Probe the backend once, then start the polling loops. Polling starts
    // even when the probe fails; every later poll can still recover the
    // connection on its own.
    let state_for_startup = state;
    spawn_local(async move {
        state_for_startup.loading.set(true);

        match api::check_health().await {
            Ok(health) if health.is_healthy() => {
                state_for_startup.connection.set(ConnectionStatus::Connected);
            }
            Ok(_) => {
                state_for_startup.connection.set(ConnectionStatus::Disconnected);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("API health check failed: {}", e).into());
                state_for_startup
                    .connection
                    .set(ConnectionStatus::ConnectionError);
            }
        }

        state_for_startup.loading.set(false);
        start_polling(&state_for_startup);
    });

    view! {
        <Router>
            <div class="min-h-screen bg-slate-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/report" view=Report />
                        <Route path="/community" view=Community />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with connection status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing connection status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-slate-800 border-t border-slate-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Connection status
                <div class="flex items-center space-x-2">
                    {move || {
                        let status = state.connection.get();
                        let (dot_class, text_class) = match status {
                            ConnectionStatus::Connected => {
                                ("w-2 h-2 bg-green-400 rounded-full pulse", "text-green-400")
                            }
                            ConnectionStatus::Connecting => {
                                ("w-2 h-2 bg-yellow-400 rounded-full pulse", "text-yellow-400")
                            }
                            _ => ("w-2 h-2 bg-red-400 rounded-full", "text-red-400"),
                        };

                        view! {
                            <span class=format!("flex items-center space-x-1 {}", text_class)>
                                <span class=dot_class />
                                <span>{status.label()}</span>
                            </span>
                        }
                    }}
                </div>

                // Last update time
                <div class="text-slate-400">
                    {move || {
                        state
                            .last_update
                            .get()
                            .map(|ago| format!("Last update: {}", ago))
                            .unwrap_or_else(|| "No data yet".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-blue-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
