//! Draft generation command handler

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::ai::prompts;
use crate::ai::{OllamaGenerator, TextGenerator};
use crate::cli::commands::Cli;
use crate::cli::tasks::prompt_tasks_stdin;
use crate::core::checklist::mark_checklist;
use crate::core::clipboard::copy_to_clipboard;
use crate::core::git::{CommitBatch, GitRepository, VersionControl};
use crate::core::output::{project_name, OutputLocation};
use crate::core::{Config, ProjectProfile};
use crate::document;
use crate::error::Result;

/// A finished draft and the metadata it was built from
#[derive(Debug, Clone)]
pub struct Draft {
    pub batch: CommitBatch,
    pub document: String,
}

/// Build a draft from injected collaborators
///
/// Nothing is written here; a generator failure aborts before any output.
pub fn build_draft(
    vcs: &dyn VersionControl,
    generator: &dyn TextGenerator,
    profile: ProjectProfile,
    commit_count: usize,
    tasks: &[String],
) -> Result<Draft> {
    let batch = CommitBatch::collect(vcs, commit_count);
    let checklist = mark_checklist(profile, &batch.diff_stats);

    let prompt = prompts::prompt_for_batch(&batch, profile);
    let raw = generator.generate(&prompt)?;
    tracing::debug!("Generator returned {} bytes", raw.len());

    let narrative = document::clean_generated(&raw);
    let document = document::assemble(&narrative, tasks, profile, &checklist);

    Ok(Draft { batch, document })
}

/// Build a draft and save it under `root`
#[allow(clippy::too_many_arguments)]
pub fn save_draft(
    vcs: &dyn VersionControl,
    generator: &dyn TextGenerator,
    profile: ProjectProfile,
    commit_count: usize,
    tasks: &[String],
    root: &Path,
    project: &str,
    date: NaiveDate,
) -> Result<(Draft, PathBuf)> {
    let draft = build_draft(vcs, generator, profile, commit_count, tasks)?;
    let location = OutputLocation::new(root, project, date, draft.batch.short_id());
    let path = location.write(&draft.document)?;
    Ok((draft, path))
}

/// Apply command-line overrides on top of the loaded config
fn effective_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;

    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output_root = Some(dir.clone());
    }
    if cli.no_clipboard {
        config.clipboard = false;
    }

    config.validate()?;
    Ok(config)
}

/// Handle the draft generation command
pub fn handle_generate(cli: Cli) -> Result<()> {
    let config = effective_config(&cli)?;

    if cli.init_config {
        let path = config.save()?;
        println!("✓ Configuración guardada en {}", path.display());
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let git = GitRepository::discover(&cwd)?;

    let profile = ProjectProfile::detect_in_dir(&cwd);
    println!("🔎 Proyecto detectado: {}", profile.name().to_uppercase());

    let mut tasks = cli.tasks.clone();
    if cli.interactive_tasks {
        tasks.extend(prompt_tasks_stdin()?);
    }

    let generator = OllamaGenerator::from_config(&config);
    println!("🧠 Procesando con Ollama ({})...", generator.model_name());

    let (draft, path) = save_draft(
        &git,
        &generator,
        profile,
        cli.commits as usize,
        &tasks,
        &config.resolved_output_root()?,
        &project_name(&cwd),
        Local::now().date_naive(),
    )?;

    if cli.print {
        println!("\n{}", draft.document);
    }

    if config.clipboard {
        match copy_to_clipboard(&draft.document) {
            Ok(()) => println!("📋 Copiado al portapapeles."),
            Err(e) => {
                tracing::warn!("{}", e);
                println!("⚠️ No se pudo copiar al portapapeles. ¿Estás en un entorno sin GUI?");
            }
        }
    }

    println!("✅ Pull Request generado y guardado en: {}", path.display());
    Ok(())
}
