use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target carry an already formatted terminal line.
pub const PRINT_TARGET: &str = "companion::print";
pub const RAW_MESSAGE_FIELD: &str = "raw_msg";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, quiet: u8) {
    if no_banner || quiet > 0 {
        return;
    }

    let title = format!("⟦ COMPANION v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let fill = "═".repeat(TOTAL_WIDTH.saturating_sub(title.width()) / 2).bright_black();
    print(&format!("{fill}{}{fill}", title.bright_green().bold()));
}

/// `─────⟦ MSG ⟧─────`, centered on [`TOTAL_WIDTH`].
pub fn header(msg: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let label = format!("⟦ {} ⟧", msg.to_uppercase());
    let fill = TOTAL_WIDTH.saturating_sub(label.width());
    let left = "─".repeat(fill / 2).bright_black();
    let right = "─".repeat(fill - fill / 2).bright_black();
    print(&format!("{left}{}{right}", label.bright_green()));
}

pub fn status<T: AsRef<str>>(msg: T) {
    let prefix = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

/// `> Key.....: value` rows, keys padded to the longest one.
pub fn details(rows: &[Detail]) {
    let key_width = key_width(rows);
    for (key, value) in rows {
        let dots = ".".repeat(key_width + 1 - key.width());
        let colon = format!("{dots}:").color(colors::SEPARATOR);
        status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
    }
}

/// Numbered entries, each a name with its details as branches.
///
/// `quiet >= 2` hides the entries; callers still print their summary.
pub fn trees<'a, I>(entries: I, quiet: u8)
where
    I: IntoIterator<Item = (&'a str, Vec<Detail>)>,
{
    if quiet >= 2 {
        return;
    }

    for (idx, (name, rows)) in entries.into_iter().enumerate() {
        if idx > 0 {
            print("");
        }
        tree(idx, name, &rows);
    }
}

fn tree(idx: usize, name: &str, rows: &[Detail]) {
    let index = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!("{} {}", index.color(colors::SEPARATOR), name.color(colors::PRIMARY)));

    let key_width = key_width(rows);
    for (i, (key, value)) in rows.iter().enumerate() {
        let branch = if i + 1 == rows.len() { "└─" } else { "├─" };
        let dots = ".".repeat(key_width - key.width());
        print(&format!(
            " {} {}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            format!("{dots}:").color(colors::SEPARATOR),
            value
        ));
    }
}

/// Closing line of a listing: a centered line under a rule, or a single
/// status line once the user asked for less output.
pub fn summary(line: &str, quiet: u8) {
    if quiet > 0 {
        status(line);
        return;
    }

    print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
    let pad = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(line)) / 2);
    print(&format!("{pad}{line}"));
}

const NO_RESULTS: &str = r#"
         _   _  ___ _____   _____ ___  _   _ _   _ ____
        | \ | |/ _ \_   _| |  ___/ _ \| | | | \ | |  _ \
        |  \| | | | || |   | |_ | | | | | | |  \| | | | |
        | |\  | |_| || |   |  _|| |_| | |_| | |\  | |_| |
        |_| \_|\___/ |_|   |_|   \___/ \___/|_| \_|____/
"#;

pub fn no_results() {
    print(&NO_RESULTS.red().bold().to_string());
}

fn key_width(rows: &[Detail]) -> usize {
    rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0)
}
