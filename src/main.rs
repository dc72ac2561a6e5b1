//! Widgetbox Entry Point

mod app;
mod components;
mod game;
mod models;
mod rotation;
mod storage;
mod todos;

fn main() {
    console_error_panic_hook::set_once();
    app::mount_widgets();
}
