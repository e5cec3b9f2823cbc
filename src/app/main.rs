use std::time::Duration;

use js_sys::Date;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ConfigProvider, Flex, FlexAlign, Text, Theme};

fn current_time() -> String {
    let now = Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

#[component]
fn Clock() -> impl IntoView {
    let time = RwSignal::new(current_time());
    if let Err(e) = set_interval_with_handle(move || time.set(current_time()), Duration::from_secs(1))
    {
        log::error!("Failed to start the clock: {e:?}");
    }
    view! { <div class="clock">{move || time.get()}</div> }
}

fn theme_label(dark: bool) -> &'static str {
    if dark {
        "Light"
    } else {
        "Dark"
    }
}

/// The root component. Paints its own background from the active theme, the
/// body is left to the framework stylesheet.
#[component]
pub fn Main() -> impl IntoView {
    let theme = RwSignal::new(Theme::dark());
    let dark = Memo::new(move |_| theme.with(|t| t.name == "dark"));
    let background = Memo::new(move |_| {
        theme.with(|t| t.color.color_neutral_background_1().to_string())
    });
    let on_toggle = move |_| {
        let next = if dark.get_untracked() {
            Theme::light()
        } else {
            Theme::dark()
        };
        log::debug!("Switching theme to {}", next.name);
        theme.set(next);
    };
    view! {
        <ConfigProvider theme>
            <div class="outer-layout" style:background-color=move || background.get()>
                <Flex vertical=true align=FlexAlign::Center>
                    <Text class="title">"cygbot"</Text>
                    <Clock />
                    <Button appearance=ButtonAppearance::Subtle on_click=on_toggle>
                        {move || theme_label(dark.get())}
                    </Button>
                </Flex>
            </div>
        </ConfigProvider>
    }
}
