use fltk::{app, prelude::*};

use nut_pad::app::messages::Message;
use nut_pad::app::settings::AppSettings;
use nut_pad::app::state::AppState;
use nut_pad::ui::main_window::build_main_window;
use nut_pad::ui::menu::build_menu;

fn main() {
    env_logger::init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    log::debug!("Settings: {:?}", settings);

    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender);

    widgets.wind.end();
    widgets.wind.show();

    let mut state = AppState::new(widgets.wind.clone(), widgets.buffer.clone(), settings);

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                log::info!("Exiting");
                app.quit();
            }
        }
    }
}
