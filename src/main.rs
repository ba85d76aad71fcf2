//! LeakSense Dashboard
//!
//! Water leak detection dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live pressure, moisture, and acoustic gauges with threshold alerts
//! - 24-hour history charts with selectable time windows
//! - Community issue reporting with a local leaderboard
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It polls the LeakSense API over HTTP; issue reports stay in
//! the browser's localStorage.

use leptos::*;

mod alerts;
mod api;
mod app;
mod components;
mod format;
mod pages;
mod series;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
