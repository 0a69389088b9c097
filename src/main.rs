// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use iced_folio::domain::ShotId;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        api_base_url: args.opt_value_from_str("--api").unwrap_or(None),
        initial_shot: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
            .map(|s| ShotId::from(s.as_str())),
    };

    app::run(flags)
}
