use gpui::*;
use gpui_component::Root;

use crate::complex_link_story::ComplexLinkExample;

mod complex_link_story;

fn main() {
    env_logger::init();

    let app = Application::new();

    app.run(move |cx| {
        gpui_component::init(cx);
        gpui_complex_link::init(cx);
        cx.activate(true);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some("ComplexLink".into()),
                        appears_transparent: false,
                        traffic_light_position: None,
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    let view = ComplexLinkExample::view(window, cx);
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
