#![allow(warnings)]
//! Knowledge Portal Frontend Entry Point

mod api;
mod app;
mod components;
mod detail;
mod lists;
mod markdown;
mod models;
mod pages;
mod pdf;
mod poll;
mod session;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
