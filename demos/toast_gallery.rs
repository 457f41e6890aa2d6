// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery of toast notifications.
//!
//! Run with `cargo run --example toast_gallery`.

use iced::widget::{button, container, Column, Stack, Text};
use iced::{alignment, Element, Length, Subscription, Task, Theme};
use iced_toasts::{Manager, Notification, Toast};
use std::time::Duration;

fn main() -> iced::Result {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .ok();

    iced::application(Gallery::default, Gallery::update, Gallery::view)
        .title("iced_toasts gallery")
        .theme(|_state: &Gallery| Theme::Dark)
        .subscription(Gallery::subscription)
        .run()
}

#[derive(Default)]
struct Gallery {
    toasts: Manager,
}

#[derive(Debug, Clone)]
enum Message {
    ShowSuccess,
    ShowError,
    ShowWarning,
    ShowInfo,
    ShowUndo,
    ShowPersistent,
    ShowSlow,
    Toast(iced_toasts::Message),
}

impl Gallery {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowSuccess => {
                self.toasts.add_success("Profile saved");
            }
            Message::ShowError => {
                self.toasts.add_error("Upload failed: connection reset");
            }
            Message::ShowWarning => {
                self.toasts.add_warning("Disk space is running low");
            }
            Message::ShowInfo => {
                self.toasts.add_info("A new version is available");
            }
            Message::ShowUndo => {
                self.toasts
                    .add_info_with_action("Conversation archived", "Undo", || {
                        log::info!("undo requested");
                    });
            }
            Message::ShowPersistent => {
                self.toasts
                    .push(Notification::error("Licence expired").persistent());
            }
            Message::ShowSlow => {
                self.toasts.push(
                    Notification::info("This one lingers for 15 seconds")
                        .auto_dismiss(Duration::from_secs(15)),
                );
            }
            Message::Toast(message) => self.toasts.update(&message),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let trigger = |label, message| button(Text::new(label)).on_press(message).width(260);

        let controls = Column::new()
            .spacing(8)
            .align_x(alignment::Horizontal::Center)
            .push(trigger("Success toast", Message::ShowSuccess))
            .push(trigger("Error toast", Message::ShowError))
            .push(trigger("Warning toast", Message::ShowWarning))
            .push(trigger("Info toast", Message::ShowInfo))
            .push(trigger("Toast with undo action", Message::ShowUndo))
            .push(trigger("Persistent toast", Message::ShowPersistent))
            .push(trigger("Slow toast (15s)", Message::ShowSlow));

        let content = container(controls).center(Length::Fill);

        Stack::new()
            .push(content)
            .push(Toast::view_overlay(&self.toasts).map(Message::Toast))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }
}
