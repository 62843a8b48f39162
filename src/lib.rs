//! Layout engine for the room seating editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editor's state: the room and everything placed in it, the single selected
//! object, and the drag gesture in progress. The host JavaScript layer wires
//! DOM events to [`engine::Engine`], draws the meshes described by
//! [`scene`], and renders the dashboard panels from the [`panel`] view models.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Room, tables, seats, people, and cascading removal |
//! | [`layout`] | Seat placement around tables and bounds clamping |
//! | [`camera`] | Perspective camera and pointer rays |
//! | [`hit`] | Ray picking against tables and seats |
//! | [`input`] | Keys, seat-list directions, and the drag gesture state |
//! | [`panel`] | Object list and property panel view models |
//! | [`scene`] | Mesh descriptions for the host's 3D engine |
//! | [`config`] | Default dimensions, overridable from JSON |
//! | [`color`] | Hex color parsing |
//! | [`error`] | [`error::EditorError`] |
//! | [`consts`] | Shared numeric constants (seat offsets, highlight colors, etc.) |

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod layout;
pub mod panel;
pub mod scene;

/// Route `log` output to the browser console and panics to `console.error`.
#[cfg(all(feature = "browser", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match console_log::init_with_level(log::Level::Debug) {
        Ok(()) => log::debug!("roomplan engine loaded"),
        Err(err) => log::warn!("console logger not installed: {err}"),
    }
}
