use std::rc::Rc;

use gbacklight::{Gbacklight, SLIDER_STEP, SLIDER_UPPER, WindowConfig};
use gtk::glib::{self, clone};
use gtk::prelude::*;
use gtk::{
    Adjustment, Application, ApplicationWindow, Box as GtkBox, Button, Orientation, PositionType,
    Scale, gio,
};

const APPLICATION_ID: &str = "org.gbacklight.Gbacklight";

/// Show the slider window and block until it is closed.
pub fn run(gbacklight: Gbacklight, percentage: f64, config: WindowConfig) -> i32 {
    let app = Application::builder()
        .application_id(APPLICATION_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let gbacklight = Rc::new(gbacklight);
    app.connect_activate(move |app| {
        build_ui(app, gbacklight.clone(), percentage, &config);
    });

    // Our arguments were already handled by clap
    let empty_args: Vec<String> = vec![];
    app.run_with_args(&empty_args).into()
}

fn build_ui(app: &Application, gbacklight: Rc<Gbacklight>, percentage: f64, config: &WindowConfig) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title(config.title.as_str())
        .build();

    let vbox = GtkBox::new(Orientation::Vertical, 0);
    vbox.set_margin_top(config.margin);
    vbox.set_margin_bottom(config.margin);
    vbox.set_margin_start(config.margin);
    vbox.set_margin_end(config.margin);

    // page size of one step keeps the reachable maximum at 100
    let adjustment = Adjustment::new(
        percentage,
        0.0,
        SLIDER_UPPER,
        SLIDER_STEP,
        SLIDER_STEP,
        SLIDER_STEP,
    );
    let scale = Scale::new(Orientation::Horizontal, Some(&adjustment));
    scale.set_size_request(config.width, config.height);
    scale.set_digits(config.digits);
    scale.set_draw_value(true);
    scale.set_value_pos(PositionType::Right);
    scale.set_vexpand(true);
    scale.connect_value_changed(move |scale| {
        if let Err(err) = gbacklight.set_percentage(scale.value()) {
            log::error!("Failed to set {}: {err}", gbacklight.property_name());
        }
    });
    vbox.append(&scale);

    let button = Button::with_label("OK");
    button.set_margin_top(10);
    button.set_margin_bottom(10);
    button.connect_clicked(clone!(
        #[weak]
        window,
        move |_| window.close()
    ));
    vbox.append(&button);

    window.set_child(Some(&vbox));
    window.present();
}
