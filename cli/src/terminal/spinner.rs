use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn scan_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Turns `span` into a spinner that counts probed ports.
pub fn attach_scan_spinner(span: &Span) {
    span.pb_set_style(&scan_style());
    span.pb_set_message("Probing listening ports");
}

pub fn report_scan_progress(span: &Span, finished: usize, total: usize) {
    span.pb_set_length(total as u64);
    span.pb_set_position(finished as u64);
}
