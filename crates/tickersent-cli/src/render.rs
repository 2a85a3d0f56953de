//! Human-readable report rendering.

use tickersent_analysis::{AnalysisReport, SentimentLabel};

/// Entries shown in the sample section.
const SAMPLE_LEN: usize = 5;
/// Character cap for a sample line's document text.
const SNIPPET_MAX_CHARS: usize = 300;

/// Render the summary block plus a bounded sample of scored posts.
#[must_use]
pub fn render_report(report: &AnalysisReport) -> String {
    let total = report.len();
    let summary = &report.summary;

    let mut out = String::new();
    out.push_str(&format!("{}: {total} posts analyzed\n", report.ticker));
    out.push_str(&format!(
        "  positive: {} ({:.1}%)\n",
        summary.positive,
        percentage(summary.positive, total)
    ));
    out.push_str(&format!(
        "  negative: {} ({:.1}%)\n",
        summary.negative,
        percentage(summary.negative, total)
    ));
    out.push_str(&format!(
        "  neutral:  {} ({:.1}%)\n",
        summary.neutral,
        percentage(summary.neutral, total)
    ));
    out.push_str(&format!("  average score: {:.3}\n", summary.average_score));

    out.push_str("  sample:\n");
    for entry in report.entries.iter().take(SAMPLE_LEN) {
        out.push_str(&format!(
            "    [{}] {}\n",
            indicator(entry.sentiment.label),
            snippet(&entry.document.combined())
        ));
    }
    out
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let ratio = count as f64 / total as f64;
        ratio * 100.0
    }
}

/// Polarity indicator for a sample line.
fn indicator(label: SentimentLabel) -> char {
    match label {
        SentimentLabel::Positive => '+',
        SentimentLabel::Negative => '-',
        SentimentLabel::Neutral => '~',
    }
}

/// Cap text at [`SNIPPET_MAX_CHARS`] characters, appending an ellipsis when cut.
fn snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_MAX_CHARS {
        text.to_string()
    } else {
        let mut capped: String = text.chars().take(SNIPPET_MAX_CHARS).collect();
        capped.push('…');
        capped
    }
}
