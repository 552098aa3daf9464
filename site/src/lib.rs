//! ==============================================================================
//! lib.rs - static site front end
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the site. renders the shared page shell
//!     (header with title and blog/notes navigation) around page content.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - site metadata embedded from site.json
//!     - route strings resolved by the static host
//!
//! ==============================================================================

use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use wasm_bindgen::prelude::*;

mod components;
mod config;

pub use components::{Header, Layout};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    let meta = config::load_site_metadata();
    log!("rendering site {:?}", meta.title);

    view! {
        <Title text=meta.title.clone() />
        <Meta name="description" content=meta.description.clone() />
        <Layout site_title=meta.title author=meta.author>
            <h2>"Hi people"</h2>
            <p>"Welcome to the site. Posts live under Blog, shorter writing under Notes."</p>
        </Layout>
    }
}
