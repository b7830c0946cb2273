mod app;
mod catalog;
mod config;
mod controller;
mod error;
mod media;
mod mpris;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
