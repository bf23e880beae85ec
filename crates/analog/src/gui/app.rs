use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::clock::{self, ClockState};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use crate::prefs::{self, Preferences, SizeChange, SizePreference};
use clockface::WallClockSample;
use gtk::gdk::Key;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<ClockState>>,
    pub config: Config,
    pub size: SizePreference,
    pub visible: bool,
    pub hovered: bool,
    pub readout: String,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Tick(WallClockSample),
    Hover(bool),
    Resize(SizeChange),
    Show,
    Hide,
    Quit,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Tick(s) => AppMsg::Tick(s),
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Quit => AppMsg::Quit,
            AppEvent::Resize(c) => AppMsg::Resize(c),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn opacity(&self) -> f64 {
        if self.hovered {
            self.config.clock.hover_opacity()
        } else {
            1.0
        }
    }

    fn key_action(key: Key) -> Option<AppMsg> {
        match key {
            Key::Escape | Key::q => Some(AppMsg::Quit),
            Key::plus | Key::equal | Key::KP_Add => Some(AppMsg::Resize(SizeChange::Grow)),
            Key::minus | Key::KP_Subtract => Some(AppMsg::Resize(SizeChange::Shrink)),
            _ => None,
        }
    }

    fn apply_size(&mut self, change: SizeChange) {
        let next = change.apply(self.size);
        if next == self.size {
            return;
        }
        self.size = next;
        window::resize(&self.root, next.pixels());

        if let Err(e) = prefs::save(&Preferences { size: next }) {
            log::error!("Failed to save clock size: {}", e);
        }
        log::info!("Clock size set to {}px", next);
    }

    fn apply_config(&mut self, new_config: Config) {
        if self.state.borrow_mut().set_style(new_config.effective_style()) {
            self.drawing_area.queue_draw();
        }
        window::apply_placement(&self.root, &new_config.clock);
        self.config = new_config;
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        ClockState,
        Config,
        SizePreference,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Analog"),
            set_decorated: false,
            set_resizable: false,
            add_css_class: "analog-window",
            #[watch]
            set_visible: model.visible,
            #[watch]
            set_opacity: model.opacity(),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match AppModel::key_action(key) {
                        Some(msg) => {
                            sender.input(msg);
                            glib::Propagation::Stop
                        }
                        None => glib::Propagation::Proceed,
                    }
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    add_css_class: "analog-drawing-area",
                    #[watch]
                    set_content_width: model.size.pixels(),
                    #[watch]
                    set_content_height: model.size.pixels(),

                    add_controller = gtk::EventControllerMotion {
                        connect_enter[sender] => move |_, _, _| {
                            sender.input(AppMsg::Hover(true));
                        },
                        connect_leave[sender] => move |_| {
                            sender.input(AppMsg::Hover(false));
                        }
                    }
                },

                gtk::Label {
                    add_css_class: "analog-readout",
                    #[watch]
                    set_visible: model.config.clock.show_readout,
                    #[watch]
                    set_label: &model.readout,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, config, size, rx) = init;
        let readout = state.sample.to_string();

        theme::load_css();
        window::init_layer_shell(&root, &config.clock);
        window::resize(&root, size.pixels());

        let model = AppModel {
            state: Rc::new(RefCell::new(state)),
            config,
            size,
            visible: true,
            hovered: false,
            readout,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let mut state = state_draw.borrow_mut();
                state.resize(f64::from(width), f64::from(height));
                if let Err(e) = clock::draw(cr, &state, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tick(sample) => {
                if self.state.borrow_mut().tick(sample) {
                    self.readout = sample.to_string();
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Hover(hovered) => {
                self.hovered = hovered;
            }
            AppMsg::Resize(change) => self.apply_size(change),
            AppMsg::Show => {
                self.visible = true;
                self.drawing_area.queue_draw();
            }
            AppMsg::Hide => {
                self.visible = false;
                self.hovered = false;
            }
            AppMsg::Quit => {
                log::info!("Quitting");
                relm4::main_application().quit();
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.apply_config(new_config);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
