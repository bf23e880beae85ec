use analog::config;
use analog::gui::app::AppModel;
use analog::gui::clock::ClockState;
use analog::prefs;
use analog::sys::runtime;
use clockface::WallClockSample;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();
    let size = prefs::load().size;
    let state = ClockState::new(WallClockSample::now(), config.effective_style(), size.radius());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.troia.analog");

    app.run::<AppModel>((state, config, size, rx));
}
