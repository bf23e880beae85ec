use crate::prefs::SizeChange;
use clockface::WallClockSample;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Tick(WallClockSample),
    Show,
    Hide,
    Quit,
    Resize(SizeChange),
    ConfigReload,
}
