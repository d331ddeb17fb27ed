//! Report rendering for the reading recap CLI
//!
//! Each renderer returns the full report text; the caller decides where it
//! goes. The human report uses terminal colors, the JSON and CSV reports are
//! plain.

use crate::app::models::{BookRecord, RatedGroup, StatsSummary};
use crate::app::session::ReadingSession;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use colored::*;
use serde_json::json;

/// Render the session's current summary in the requested format
pub fn generate_report(format: OutputFormat, session: &ReadingSession) -> Result<String> {
    let Some(summary) = session.summary() else {
        return Err(Error::configuration("No reading log has been loaded"));
    };

    match format {
        OutputFormat::Human => Ok(generate_human_report(session, summary)),
        OutputFormat::Json => generate_json_report(session, summary),
        OutputFormat::Csv => Ok(generate_csv_report(summary)),
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn rated_group(group: &Option<RatedGroup>) -> String {
    match group {
        Some(group) => format!("{} ({:.2}, {} rated)", group.name, group.average, group.count),
        None => "-".to_string(),
    }
}

fn book_line(book: &BookRecord) -> String {
    let mut line = format!("{} - {}", book.title, book.author);
    if let Some(rating) = book.rating {
        line.push_str(&format!(" ({} ★)", rating));
    }
    line
}

/// Human-readable report
pub fn generate_human_report(session: &ReadingSession, summary: &StatsSummary) -> String {
    let mut output = format!(
        "{}\n================\n",
        "📚 Reading Recap".bright_green().bold()
    );

    if !session.filter().is_empty() {
        output.push_str(&format!(
            "🔎 Filtered: {} of {} books\n",
            session.filtered_records().len(),
            session.records().len()
        ));
    }

    output.push_str(&format!(
        "📖 Books completed: {}\n\
         📄 Pages read: {}\n\
         📏 Average pages: {}\n\
         ⭐ Average rating: {}\n\
         🔝 Highest / lowest: {} / {}\n\
         🏢 Top publisher: {}\n\
         ✍️  Best author: {}\n\
         🔁 Best series: {}\n\
         🧭 Dominant format: {}\n",
        summary.completed_count.to_string().bright_white().bold(),
        summary.total_pages.to_string().bright_white().bold(),
        optional(summary.average_pages.map(|pages| format!("{:.0}", pages))),
        optional(summary.rating_average.map(|rating| format!("{:.1}", rating))),
        optional(summary.rating_max),
        optional(summary.rating_min),
        optional(summary.top_publisher.as_deref()),
        rated_group(&summary.best_author),
        rated_group(&summary.best_series),
        optional(summary.dominant_format),
    ));

    let years = session.available_years();
    if !years.is_empty() {
        let years: Vec<String> = years.iter().map(i32::to_string).collect();
        output.push_str(&format!("📅 Years: {}\n", years.join(", ")));
    }

    let mut section = |title: &str, lines: Vec<String>| {
        if lines.is_empty() {
            return;
        }
        output.push_str(&format!("\n{}\n", title.bright_cyan().bold()));
        for line in lines {
            output.push_str(&format!("  {}\n", line));
        }
    };

    section(
        "Ratings",
        summary
            .rating_chart()
            .into_iter()
            .map(|entry| format!("{:<14} {}", entry.label, entry.count))
            .collect(),
    );
    section(
        "Top authors",
        summary
            .author_ranking
            .iter()
            .map(|entry| format!("{} ({})", entry.name, entry.count))
            .collect(),
    );
    section(
        "Top publishers",
        summary
            .publisher_ranking
            .iter()
            .map(|entry| format!("{} ({})", entry.name, entry.count))
            .collect(),
    );
    section(
        "Formats",
        summary
            .format_chart
            .iter()
            .map(|entry| format!("{:<16} {}", entry.label, entry.count))
            .collect(),
    );
    section("Highlights", summary.highlights.iter().map(book_line).collect());
    section("Favorites", summary.favorites.iter().map(book_line).collect());
    section(
        "Abandoned",
        summary
            .abandoned
            .iter()
            .map(|book| format!("{} - {}", book.title, book.author).red().to_string())
            .collect(),
    );

    output
}

/// JSON report with the summary and parse statistics
pub fn generate_json_report(session: &ReadingSession, summary: &StatsSummary) -> Result<String> {
    let report = json!({
        "metadata": {
            "books_loaded": session.records().len(),
            "books_after_filter": session.filtered_records().len(),
            "available_years": session.available_years(),
            "parse_stats": session.parse_stats(),
            "parse_success_rate": session.parse_stats().map(|stats| stats.success_rate()),
        },
        "filter": session.filter(),
        "summary": summary,
    });

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::serialization("Failed to serialize report", e))
}

/// CSV report: one `section,name,value` row per figure
pub fn generate_csv_report(summary: &StatsSummary) -> String {
    let mut rows: Vec<(&str, String, String)> = vec![
        ("totals", "completed_count".into(), summary.completed_count.to_string()),
        ("totals", "total_pages".into(), summary.total_pages.to_string()),
        (
            "totals",
            "average_pages".into(),
            summary.average_pages.map_or_else(String::new, |v| format!("{:.1}", v)),
        ),
        (
            "ratings",
            "average".into(),
            summary.rating_average.map_or_else(String::new, |v| format!("{:.2}", v)),
        ),
        (
            "ratings",
            "max".into(),
            summary.rating_max.map_or_else(String::new, |v| v.to_string()),
        ),
        (
            "ratings",
            "min".into(),
            summary.rating_min.map_or_else(String::new, |v| v.to_string()),
        ),
        (
            "formats",
            "dominant".into(),
            summary.dominant_format.map_or_else(String::new, |v| v.to_string()),
        ),
    ];

    for bucket in &summary.rating_histogram {
        rows.push(("rating_histogram", bucket.rating.to_string(), bucket.count.to_string()));
    }
    for entry in &summary.author_ranking {
        rows.push(("author_ranking", entry.name.clone(), entry.count.to_string()));
    }
    for entry in &summary.publisher_ranking {
        rows.push(("publisher_ranking", entry.name.clone(), entry.count.to_string()));
    }
    for entry in &summary.format_chart {
        rows.push(("format_counts", entry.label.clone(), entry.count.to_string()));
    }
    for (section, group) in [("best_author", &summary.best_author), ("best_series", &summary.best_series)] {
        if let Some(group) = group {
            rows.push((section, group.name.clone(), format!("{:.2}", group.average)));
        }
    }
    for book in &summary.highlights {
        rows.push(("highlights", book.title.clone(), optional(book.rating)));
    }
    for book in &summary.favorites {
        rows.push(("favorites", book.title.clone(), book.author.clone()));
    }
    for book in &summary.abandoned {
        rows.push(("abandoned", book.title.clone(), book.author.clone()));
    }

    let mut csv = String::from("section,name,value\n");
    for (section, name, value) in rows {
        csv.push_str(&format!("{},{},{}\n", section, csv_escape(&name), csv_escape(&value)));
    }
    csv
}

/// Escape CSV field values
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::filter::RecordFilter;

    const LOG: &str = "Título,Autor,Editora,Páginas,Notas,Ano\n\
                       Duna,Frank Herbert,Aleph,680,5,2024\n\
                       \"Becos da Memória, edição nova\",Conceição Evaristo,Pallas,200,4,2023\n\
                       Neuromancer,William Gibson,Aleph,300,abandonado,2024\n";

    fn loaded_session() -> ReadingSession {
        let mut session = ReadingSession::default();
        session.ingest(LOG).unwrap();
        session
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("simple"), "simple");
        assert_eq!(csv_escape("with,comma"), "\"with,comma\"");
        assert_eq!(csv_escape("with\"quote"), "\"with\"\"quote\"");
    }

    #[test]
    fn test_report_requires_loaded_session() {
        let session = ReadingSession::default();
        assert!(generate_report(OutputFormat::Human, &session).is_err());
    }

    #[test]
    fn test_human_report_mentions_books() {
        let session = loaded_session();
        let report = generate_report(OutputFormat::Human, &session).unwrap();

        assert!(report.contains("Reading Recap"));
        assert!(report.contains("Frank Herbert (1)"));
        assert!(report.contains("Top publisher: Aleph"));
        assert!(report.contains("Neuromancer"));
        assert!(report.contains("Years: 2023, 2024"));
    }

    #[test]
    fn test_json_report_is_valid() {
        let mut session = loaded_session();
        session.apply_filter(RecordFilter::new().with_year(2024));
        let report = generate_report(OutputFormat::Json, &session).unwrap();

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["metadata"]["books_loaded"], 3);
        assert_eq!(value["metadata"]["books_after_filter"], 2);
        assert_eq!(value["metadata"]["parse_success_rate"], 100.0);
        assert_eq!(value["filter"]["year"], 2024);
        assert_eq!(value["summary"]["completed_count"], 1);
        assert_eq!(value["summary"]["abandoned"][0]["title"], "Neuromancer");
    }

    #[test]
    fn test_csv_report_rows() {
        let session = loaded_session();
        let report = generate_report(OutputFormat::Csv, &session).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "section,name,value");
        assert!(lines.contains(&"totals,completed_count,2"));
        assert!(lines.contains(&"totals,total_pages,880"));
        assert!(lines.contains(&"ratings,average,4.50"));
        assert!(lines.contains(&"highlights,\"Becos da Memória, edição nova\",4"));
        assert!(lines.contains(&"abandoned,Neuromancer,William Gibson"));
    }
}
