//! `tagkit escape <text>` – HTML-escape text.

use tagkit_core::config::TagkitConfig;
use tagkit_core::text;

pub fn render_escape(cfg: &TagkitConfig, input: &str, no_double_encode: bool) -> String {
    text::escape_with(input, cfg.double_encode && !no_double_encode)
}

pub fn run_escape(cfg: &TagkitConfig, input: &str, no_double_encode: bool) {
    println!("{}", render_escape(cfg, input, no_double_encode));
}
