use crate::infra::load_knowledge;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use triage_rules::config::AppConfig;
use triage_rules::diagnosis::{DiagnosisReport, ObservedSymptoms};
use triage_rules::error::AppError;
use triage_rules::knowledge::{KnowledgeBase, KnowledgeDocument};

const CHART_WIDTH: usize = 40;

#[derive(Args, Debug, Default)]
pub(crate) struct KnowledgeArgs {
    /// JSON knowledge document (defaults to APP_KNOWLEDGE_PATH, then the bundled rules)
    #[arg(long)]
    pub(crate) knowledge: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Observed symptom code; repeat the flag or separate codes with commas
    #[arg(long = "symptom", short = 's', value_delimiter = ',')]
    pub(crate) symptoms: Vec<String>,
    /// Output format for the ranked results
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
    #[command(flatten)]
    pub(crate) knowledge: KnowledgeArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    condition: &'a str,
    match_pct: f64,
    matched: usize,
    total: usize,
}

fn resolve_knowledge(
    args: KnowledgeArgs,
    config: &AppConfig,
) -> Result<KnowledgeBase, AppError> {
    let path = args
        .knowledge
        .or_else(|| config.knowledge.document_path.clone());
    Ok(load_knowledge(path.as_deref())?)
}

pub(crate) fn run_diagnose(args: DiagnoseArgs, config: &AppConfig) -> Result<(), AppError> {
    let DiagnoseArgs {
        symptoms,
        format,
        knowledge,
    } = args;

    let observed: ObservedSymptoms = symptoms
        .iter()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty())
        .collect();
    if observed.is_empty() {
        return Err(AppError::EmptySelection);
    }

    let knowledge = resolve_knowledge(knowledge, config)?;
    let results = knowledge.engine().diagnose(&observed);
    let report = DiagnosisReport::compose(&results, &knowledge, &observed)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &observed, &report)?,
        OutputFormat::Csv => write_csv(&mut out, &report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

pub(crate) fn run_symptoms(args: KnowledgeArgs, config: &AppConfig) -> Result<(), AppError> {
    let knowledge = resolve_knowledge(args, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_symptoms(&mut out, &knowledge)?;
    Ok(())
}

pub(crate) fn run_conditions(args: KnowledgeArgs, config: &AppConfig) -> Result<(), AppError> {
    let knowledge = resolve_knowledge(args, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_conditions(&mut out, &knowledge)?;
    Ok(())
}

pub(crate) fn run_export(args: KnowledgeArgs, config: &AppConfig) -> Result<(), AppError> {
    let knowledge = resolve_knowledge(args, config)?;
    let document = KnowledgeDocument::from(&knowledge);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &document).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn write_table<W: Write>(
    out: &mut W,
    observed: &ObservedSymptoms,
    report: &DiagnosisReport,
) -> io::Result<()> {
    writeln!(out, "Symptom triage")?;
    let selected: Vec<&str> = observed.iter().map(|code| code.as_str()).collect();
    writeln!(out, "Selected symptoms: {}", selected.join(", "))?;
    if !report.ignored_symptoms.is_empty() {
        let ignored: Vec<&str> = report
            .ignored_symptoms
            .iter()
            .map(|code| code.as_str())
            .collect();
        writeln!(out, "Ignored (not in catalog): {}", ignored.join(", "))?;
    }

    match &report.primary {
        Some(primary) => {
            writeln!(
                out,
                "\nMost likely: {} ({:.1}% match)",
                primary.condition_id, primary.match_pct
            )?;
            writeln!(out, "Recommendation: {}", primary.recommendation)?;
        }
        None => writeln!(out, "\nMost likely: none (no selected symptom matches a rule)")?,
    }

    writeln!(out, "\nFull results")?;
    for result in &report.results {
        writeln!(
            out,
            "- {}: {:.1}% ({})",
            result.condition_id, result.match_pct, result.coverage_label
        )?;
    }

    writeln!(out, "\nMatch chart")?;
    let label_width = report
        .results
        .iter()
        .map(|result| result.condition_id.as_str().chars().count())
        .max()
        .unwrap_or(0);
    for result in &report.results {
        let filled = (result.score * CHART_WIDTH as f64).round() as usize;
        writeln!(
            out,
            "{:<width$} |{}{}| {:.1}%",
            result.condition_id.as_str(),
            "#".repeat(filled),
            " ".repeat(CHART_WIDTH - filled),
            result.match_pct,
            width = label_width
        )?;
    }

    Ok(())
}

fn write_csv<W: Write>(out: &mut W, report: &DiagnosisReport) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for result in &report.results {
        writer
            .serialize(CsvRow {
                condition: result.condition_id.as_str(),
                match_pct: result.match_pct,
                matched: result.matched_count,
                total: result.total_rule_size,
            })
            .map_err(io::Error::from)?;
    }
    writer.flush()
}

fn write_symptoms<W: Write>(out: &mut W, knowledge: &KnowledgeBase) -> io::Result<()> {
    writeln!(out, "Symptom catalog ({} entries)", knowledge.catalog().len())?;
    for entry in knowledge.catalog().entries() {
        writeln!(out, "- {}: {}", entry.code, entry.description)?;
    }
    Ok(())
}

fn write_conditions<W: Write>(out: &mut W, knowledge: &KnowledgeBase) -> io::Result<()> {
    writeln!(out, "Conditions ({})", knowledge.rules().len())?;
    for rule in knowledge.rules().rules() {
        let codes: Vec<&str> = rule.symptoms.iter().map(|code| code.as_str()).collect();
        writeln!(
            out,
            "- {} [{} symptoms]: {}",
            rule.id,
            rule.symptoms.len(),
            codes.join(", ")
        )?;
        writeln!(out, "  Recommendation: {}", rule.recommendation)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_rules::config::{AppEnvironment, KnowledgeConfig, ServerConfig, TelemetryConfig};

    fn report_for(codes: &[&str]) -> (ObservedSymptoms, DiagnosisReport) {
        let knowledge = KnowledgeBase::standard();
        let observed: ObservedSymptoms = codes.iter().copied().collect();
        let results = knowledge.engine().diagnose(&observed);
        let report =
            DiagnosisReport::compose(&results, &knowledge, &observed).expect("report builds");
        (observed, report)
    }

    fn rendered<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn table_shows_primary_recommendation_and_chart() {
        let (observed, report) = report_for(&["G29", "G30", "G31", "G32", "X01"]);

        let text = rendered(|out| write_table(out, &observed, &report));

        assert!(text.contains("Most likely: Impetigo (P06) (100.0% match)"));
        assert!(text.contains("Recommendation: Gunakan salep antibiotik sesuai resep dokter."));
        assert!(text.contains("Ignored (not in catalog): X01"));
        assert!(text.contains("- Impetigo (P06): 100.0% (4/4)"));
        assert!(text.contains(&format!("|{}|", "#".repeat(CHART_WIDTH))));
    }

    #[test]
    fn csv_lists_every_condition_in_rank_order() {
        let (_, report) = report_for(&["G01", "G02"]);

        let text = rendered(|out| write_csv(out, &report));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "condition,match_pct,matched,total");
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "Campak (P01),25.0,2,8");
    }

    fn config_with_document(path: Option<PathBuf>) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            knowledge: KnowledgeConfig {
                document_path: path,
            },
        }
    }

    #[test]
    fn knowledge_flag_overrides_configured_document() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let path = tmp.path().join("knowledge.json");
        let mut document = KnowledgeDocument::from(&KnowledgeBase::standard());
        document.conditions.truncate(2);
        document.recommendations.truncate(2);
        std::fs::write(&path, serde_json::to_vec(&document).expect("serializes"))
            .expect("writes");

        let configured = config_with_document(Some(path.clone()));
        let knowledge =
            resolve_knowledge(KnowledgeArgs::default(), &configured).expect("configured loads");
        assert_eq!(knowledge.rules().len(), 2);

        let bundled = config_with_document(None);
        let knowledge = resolve_knowledge(KnowledgeArgs::default(), &bundled).expect("bundled");
        assert_eq!(knowledge.rules().len(), 7);

        let missing = config_with_document(Some(tmp.path().join("absent.json")));
        let knowledge = resolve_knowledge(KnowledgeArgs { knowledge: Some(path) }, &missing)
            .expect("flag wins");
        assert_eq!(knowledge.rules().len(), 2);
    }

    #[test]
    fn catalog_and_condition_listings_include_every_entry() {
        let knowledge = KnowledgeBase::standard();

        let symptoms = rendered(|out| write_symptoms(out, &knowledge));
        assert!(symptoms.starts_with("Symptom catalog (41 entries)"));
        assert!(symptoms.contains("- G41: Fase syok, gelisah, lesu"));

        let conditions = rendered(|out| write_conditions(out, &knowledge));
        assert!(conditions.contains("- Impetigo (P06) [4 symptoms]: G29, G30, G31, G32"));
        assert_eq!(conditions.matches("Recommendation:").count(), 7);
    }
}
