// SPDX-License-Identifier: MPL-2.0
//! Native event subscription. Only the Escape key is routed; everything else
//! reaches the widgets directly.

use super::Message;
use iced::{event, keyboard, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}
